//! Repository for the `tower_plans` table.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::tower_plan::{CreateTowerPlan, TowerPlan};

const COLUMNS: &str =
    "id, tower_id, image_url, svg_url, sort_order, direction, active, created_at, updated_at";

pub struct TowerPlanRepo;

impl TowerPlanRepo {
    pub async fn create(pool: &PgPool, input: &CreateTowerPlan) -> Result<TowerPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO tower_plans (tower_id, image_url, svg_url, sort_order, direction)
             VALUES ($1, $2, $3, COALESCE($4, 0), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TowerPlan>(&query)
            .bind(input.tower_id)
            .bind(&input.image_url)
            .bind(&input.svg_url)
            .bind(input.sort_order)
            .bind(&input.direction)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_tower(pool: &PgPool, tower_id: DbId) -> Result<Vec<TowerPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tower_plans
             WHERE tower_id = $1 AND active
             ORDER BY sort_order ASC, id DESC"
        );
        sqlx::query_as::<_, TowerPlan>(&query)
            .bind(tower_id)
            .fetch_all(pool)
            .await
    }

    /// Ordered plans with at most one row per `sort_order` slot (the newest
    /// wins), matching the storefront selection view.
    pub async fn list_by_tower_deduped(
        pool: &PgPool,
        tower_id: DbId,
    ) -> Result<Vec<TowerPlan>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT ON (sort_order) {COLUMNS}
             FROM tower_plans
             WHERE tower_id = $1 AND active
             ORDER BY sort_order ASC, id DESC"
        );
        sqlx::query_as::<_, TowerPlan>(&query)
            .bind(tower_id)
            .fetch_all(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tower_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
