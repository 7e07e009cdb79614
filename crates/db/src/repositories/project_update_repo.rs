//! Repository for the `project_updates` table.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::project_update::{CreateProjectUpdate, ProjectUpdate, UpdateProjectUpdate};

const COLUMNS: &str = "id, project_id, name, image_url, status, active, created_at, updated_at";

pub struct ProjectUpdateRepo;

impl ProjectUpdateRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectUpdate,
    ) -> Result<ProjectUpdate, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_updates (project_id, name, image_url, status)
             VALUES ($1, $2, $3, COALESCE($4, 'planned'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectUpdate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_updates WHERE id = $1");
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_updates
             WHERE project_id = $1 AND active
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectUpdate,
    ) -> Result<Option<ProjectUpdate>, sqlx::Error> {
        let query = format!(
            "UPDATE project_updates SET
                name = COALESCE($2, name),
                image_url = COALESCE($3, image_url),
                status = COALESCE($4, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE project_updates SET active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
