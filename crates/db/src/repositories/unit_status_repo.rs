//! Repository for the seeded `unit_statuses` lookup table.

use sqlx::PgPool;

use crate::models::unit_status::UnitStatusRow;

const COLUMNS: &str = "id, name, slug, description, color, active";

pub struct UnitStatusRepo;

impl UnitStatusRepo {
    pub async fn list_active(pool: &PgPool) -> Result<Vec<UnitStatusRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unit_statuses WHERE active ORDER BY id");
        sqlx::query_as::<_, UnitStatusRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<UnitStatusRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unit_statuses WHERE id = $1");
        sqlx::query_as::<_, UnitStatusRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
