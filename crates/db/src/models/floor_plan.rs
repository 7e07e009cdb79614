use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A reusable floor layout template. Assigning one to a floor bulk-creates
/// `unit_count` unit rows on that floor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FloorPlan {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub unit_count: i32,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFloorPlan {
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub unit_count: i32,
}
