use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A floor row. The name always encodes the floor number as `Floor-<n>`;
/// hierarchy lookups depend on that literal format.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Floor {
    pub id: DbId,
    pub tower_id: DbId,
    pub floor_plan_id: Option<DbId>,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Floor {
    /// Build the canonical name for a floor number.
    pub fn name_for_number(n: i32) -> String {
        format!("Floor-{n}")
    }

    /// The floor number with the `Floor-` prefix stripped, as exposed in
    /// flat inventory records.
    pub fn number(&self) -> &str {
        self.name.strip_prefix("Floor-").unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFloor {
    pub tower_id: DbId,
    pub name: String,
}
