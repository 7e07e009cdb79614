//! Unit entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A unit row from the `units` table. `state` references `unit_statuses.id`
/// and maps through `estate_core::unit_state::UnitState`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unit {
    pub id: DbId,
    pub floor_id: DbId,
    pub unit_plan_id: Option<DbId>,
    pub name: String,
    pub slug: Option<String>,
    /// Per-unit cost override; listings fall back to the plan's base cost.
    pub cost: Option<i64>,
    pub state: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnit {
    pub floor_id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub cost: Option<i64>,
    /// Defaults to 1 (Available) if omitted.
    pub state: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUnit {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub cost: Option<i64>,
    pub state: Option<i32>,
}

/// Unit row joined with its plan and status for detail endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnitDetail {
    pub id: DbId,
    pub floor_id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub cost: Option<i64>,
    pub state: i32,
    pub status_name: Option<String>,
    pub status_color: Option<String>,
    pub plan_type: Option<String>,
    pub plan_area: Option<i32>,
    pub plan_cost: Option<i64>,
    pub plan_vr_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
