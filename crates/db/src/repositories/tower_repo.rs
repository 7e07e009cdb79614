//! Repository for the `towers` table.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::floor::Floor;
use crate::models::tower::{CreateTower, Tower, UpdateTower};

const COLUMNS: &str = "id, building_id, name, floor_count, created_at, updated_at";

pub struct TowerRepo;

impl TowerRepo {
    /// Insert a tower and auto-create its floors `Floor-1..Floor-n` in a
    /// single transaction; a failure on any floor rolls back the tower too.
    pub async fn create(pool: &PgPool, input: &CreateTower) -> Result<Tower, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO towers (building_id, name, floor_count)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let tower = sqlx::query_as::<_, Tower>(&query)
            .bind(input.building_id)
            .bind(&input.name)
            .bind(input.floor_count)
            .fetch_one(&mut *tx)
            .await?;

        for n in 1..=input.floor_count {
            sqlx::query("INSERT INTO floors (tower_id, name) VALUES ($1, $2)")
                .bind(tower.id)
                .bind(Floor::name_for_number(n))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(tower)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tower>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM towers WHERE id = $1");
        sqlx::query_as::<_, Tower>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact-name lookup scoped to one building, used by hierarchy resolution.
    pub async fn find_by_building_and_name(
        pool: &PgPool,
        building_id: DbId,
        name: &str,
    ) -> Result<Option<Tower>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM towers WHERE building_id = $1 AND name = $2");
        sqlx::query_as::<_, Tower>(&query)
            .bind(building_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_building(
        pool: &PgPool,
        building_id: DbId,
    ) -> Result<Vec<Tower>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM towers WHERE building_id = $1 ORDER BY id");
        sqlx::query_as::<_, Tower>(&query)
            .bind(building_id)
            .fetch_all(pool)
            .await
    }

    /// All towers under any building of the project, for the console's
    /// project detail view.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Tower>, sqlx::Error> {
        let query = "SELECT t.id, t.building_id, t.name, t.floor_count,
                    t.created_at, t.updated_at
             FROM towers t
             JOIN buildings b ON b.id = t.building_id
             WHERE b.project_id = $1
             ORDER BY t.id";
        sqlx::query_as::<_, Tower>(query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTower,
    ) -> Result<Option<Tower>, sqlx::Error> {
        let query = format!(
            "UPDATE towers SET
                name = COALESCE($2, name),
                floor_count = COALESCE($3, floor_count),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tower>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.floor_count)
            .fetch_optional(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM towers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
