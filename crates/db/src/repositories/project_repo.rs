//! Repository for the `projects` table.

use sqlx::PgPool;

use estate_core::slug::project_slug;
use estate_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectWithPriceRange, UpdateProject};

const COLUMNS: &str = "id, user_id, name, slug, description, project_url, website_link, \
     registration_number, active, logo, qr_code, location, location_title, \
     location_description, location_image, location_logo, latitude, longitude, \
     walkthrough_video, home_location_description, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project. The slug is derived from the name; a duplicate
    /// slug violates `uq_projects_slug` and surfaces as a conflict.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, name, slug, description, project_url,
                                   registration_number, logo, qr_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(project_slug(&input.name))
            .bind(&input.description)
            .bind(&input.project_url)
            .bind(&input.registration_number)
            .bind(&input.logo)
            .bind(&input.qr_code)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List a user's projects with the min/max unit-plan cost per project,
    /// computed in a single join rather than per-project queries.
    pub async fn list_by_user_with_prices(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProjectWithPriceRange>, sqlx::Error> {
        #[derive(sqlx::FromRow)]
        struct Row {
            #[sqlx(flatten)]
            project: Project,
            min_price: Option<i64>,
            max_price: Option<i64>,
        }

        let query = "SELECT p.*, price.min_price, price.max_price
             FROM projects p
             LEFT JOIN LATERAL (
                 SELECT MIN(cost) AS min_price, MAX(cost) AS max_price
                 FROM unit_plans WHERE project_id = p.id
             ) price ON TRUE
             WHERE p.user_id = $1
             ORDER BY p.created_at DESC";
        let rows = sqlx::query_as::<_, Row>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| ProjectWithPriceRange {
                project: r.project,
                min_price: r.min_price,
                max_price: r.max_price,
            })
            .collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                project_url = COALESCE($4, project_url),
                website_link = COALESCE($5, website_link),
                registration_number = COALESCE($6, registration_number),
                logo = COALESCE($7, logo),
                qr_code = COALESCE($8, qr_code),
                location = COALESCE($9, location),
                location_title = COALESCE($10, location_title),
                location_description = COALESCE($11, location_description),
                location_image = COALESCE($12, location_image),
                location_logo = COALESCE($13, location_logo),
                latitude = COALESCE($14, latitude),
                longitude = COALESCE($15, longitude),
                walkthrough_video = COALESCE($16, walkthrough_video),
                home_location_description = COALESCE($17, home_location_description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.project_url)
            .bind(&input.website_link)
            .bind(&input.registration_number)
            .bind(&input.logo)
            .bind(&input.qr_code)
            .bind(&input.location)
            .bind(&input.location_title)
            .bind(&input.location_description)
            .bind(&input.location_image)
            .bind(&input.location_logo)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.walkthrough_video)
            .bind(&input.home_location_description)
            .fetch_optional(pool)
            .await
    }

    /// Toggle the active flag.
    pub async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE projects SET active = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(active)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project and, via FK cascade, its hierarchy.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Project counts for the dashboard, scoped to one owner when given.
    pub async fn counts(
        pool: &PgPool,
        user_id: Option<DbId>,
    ) -> Result<(i64, i64), sqlx::Error> {
        let row: (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE active)
             FROM projects
             WHERE ($1::bigint IS NULL OR user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }
}
