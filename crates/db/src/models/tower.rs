use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A tower row from the `towers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tower {
    pub id: DbId,
    pub building_id: DbId,
    pub name: String,
    pub floor_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tower. Creation also generates `floor_count` floor
/// rows named `Floor-1` through `Floor-<floor_count>`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTower {
    pub building_id: DbId,
    pub name: String,
    pub floor_count: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTower {
    pub name: Option<String>,
    pub floor_count: Option<i32>,
}
