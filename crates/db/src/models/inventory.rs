//! Flat denormalized inventory records for the storefront filter endpoint.

use serde::Serialize;
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// One unit flattened with its ancestry, plan, and status.
///
/// JSON keys keep the original storefront contract (PascalCase field names,
/// `SBU` = super built-up area).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryRecord {
    pub id: DbId,
    #[serde(rename = "TowerName")]
    pub tower_name: String,
    /// Floor name with the `Floor-` prefix stripped.
    #[serde(rename = "FloorNumber")]
    pub floor_number: String,
    #[serde(rename = "FlatNumber")]
    pub flat_number: String,
    /// Per-unit cost override, falling back to the plan's base cost.
    #[serde(rename = "TotalCost")]
    pub total_cost: Option<i64>,
    #[serde(rename = "SBU")]
    pub sbu: Option<i32>,
    /// Lowercase status name.
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "UnitType")]
    pub unit_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
