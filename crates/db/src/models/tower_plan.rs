use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A selection-view image for a tower. Ordered by `sort_order`; the
/// storefront shows at most one plan per order slot.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TowerPlan {
    pub id: DbId,
    pub tower_id: DbId,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub sort_order: i32,
    pub direction: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTowerPlan {
    pub tower_id: DbId,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub sort_order: Option<i32>,
    pub direction: Option<String>,
}
