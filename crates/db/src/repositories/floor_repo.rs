//! Repository for the `floors` table.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::floor::Floor;

const COLUMNS: &str = "id, tower_id, floor_plan_id, name, created_at, updated_at";

pub struct FloorRepo;

impl FloorRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE id = $1");
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact-name lookup scoped to one tower, used by hierarchy resolution.
    /// Callers pass the full `Floor-<n>` name.
    pub async fn find_by_tower_and_name(
        pool: &PgPool,
        tower_id: DbId,
        name: &str,
    ) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE tower_id = $1 AND name = $2");
        sqlx::query_as::<_, Floor>(&query)
            .bind(tower_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_tower(pool: &PgPool, tower_id: DbId) -> Result<Vec<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE tower_id = $1 ORDER BY id");
        sqlx::query_as::<_, Floor>(&query)
            .bind(tower_id)
            .fetch_all(pool)
            .await
    }

    /// Assign a floor plan to a floor and bulk-create its units, all in one
    /// transaction.
    ///
    /// The plan's `unit_count` determines how many unit rows are created,
    /// named `<floor-name>-U<i>` and starting Available. A failure on any
    /// insert rolls back the plan assignment too. Missing floor or plan
    /// surfaces as `RowNotFound`.
    pub async fn assign_plan(
        pool: &PgPool,
        floor_id: DbId,
        floor_plan_id: DbId,
    ) -> Result<Floor, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let unit_count: i32 =
            sqlx::query_scalar("SELECT unit_count FROM floor_plans WHERE id = $1 AND active")
                .bind(floor_plan_id)
                .fetch_one(&mut *tx)
                .await?;

        let query = format!(
            "UPDATE floors SET floor_plan_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let floor = sqlx::query_as::<_, Floor>(&query)
            .bind(floor_id)
            .bind(floor_plan_id)
            .fetch_one(&mut *tx)
            .await?;

        for i in 1..=unit_count {
            sqlx::query("INSERT INTO units (floor_id, name) VALUES ($1, $2)")
                .bind(floor.id)
                .bind(format!("{}-U{i}", floor.name))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(floor)
    }

    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!(
            "UPDATE floors SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM floors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
