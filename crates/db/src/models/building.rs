use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A building row from the `buildings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Building {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBuilding {
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBuilding {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub svg_url: Option<String>,
}
