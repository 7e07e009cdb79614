//! Repository for the `buildings` table.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::building::{Building, CreateBuilding, UpdateBuilding};

const COLUMNS: &str = "id, project_id, name, image_url, svg_url, created_at, updated_at";

pub struct BuildingRepo;

impl BuildingRepo {
    pub async fn create(pool: &PgPool, input: &CreateBuilding) -> Result<Building, sqlx::Error> {
        let query = format!(
            "INSERT INTO buildings (project_id, name, image_url, svg_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.svg_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The building shown for a project when several exist: most recent by
    /// creation time. The schema has no explicit "current" pointer, so this
    /// tie-break is the contract storefront lookups rely on.
    pub async fn latest_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Building>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM buildings
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Building>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM buildings WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBuilding,
    ) -> Result<Option<Building>, sqlx::Error> {
        let query = format!(
            "UPDATE buildings SET
                name = COALESCE($2, name),
                image_url = COALESCE($3, image_url),
                svg_url = COALESCE($4, svg_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.svg_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
