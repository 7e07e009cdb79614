use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A reusable unit layout template (e.g. "3BHK", 1200 sq ft).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnitPlan {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub type_label: String,
    pub area: i32,
    pub cost: Option<i64>,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub vr_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnitPlan {
    pub project_id: DbId,
    pub name: String,
    pub type_label: String,
    pub area: i32,
    pub cost: Option<i64>,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub vr_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUnitPlan {
    pub name: Option<String>,
    pub type_label: Option<String>,
    pub area: Option<i32>,
    pub cost: Option<i64>,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub vr_url: Option<String>,
}

/// A balcony view image attached to a unit plan.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BalconyImage {
    pub id: DbId,
    pub unit_plan_id: DbId,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub vr_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBalconyImage {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub vr_url: Option<String>,
}
