//! Repository for the `floor_plans` table.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::floor_plan::{CreateFloorPlan, FloorPlan};

const COLUMNS: &str =
    "id, project_id, name, image_url, svg_url, unit_count, active, created_at, updated_at";

pub struct FloorPlanRepo;

impl FloorPlanRepo {
    pub async fn create(pool: &PgPool, input: &CreateFloorPlan) -> Result<FloorPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO floor_plans (project_id, name, image_url, svg_url, unit_count)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FloorPlan>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.svg_url)
            .bind(input.unit_count)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FloorPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floor_plans WHERE id = $1");
        sqlx::query_as::<_, FloorPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<FloorPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM floor_plans
             WHERE project_id = $1 AND active
             ORDER BY id"
        );
        sqlx::query_as::<_, FloorPlan>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Soft delete. Floors already pointing at this plan keep their units.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE floor_plans SET active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
