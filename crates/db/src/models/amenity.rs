use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A project amenity. Soft-deleted via `active = false`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Amenity {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub vr_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmenity {
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub vr_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAmenity {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub vr_url: Option<String>,
}
