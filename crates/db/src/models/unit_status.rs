use serde::Serialize;
use sqlx::FromRow;

/// A row of the `unit_statuses` lookup table. The ids are fixed by the seed
/// migration and mirrored by `estate_core::unit_state::UnitState`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnitStatusRow {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub active: bool,
}
