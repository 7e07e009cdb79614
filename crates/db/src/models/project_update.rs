use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A construction-progress update for a project. Soft-deleted via
/// `active = false`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectUpdate {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub status: String,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectUpdate {
    pub project_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    /// One of `planned`, `in_progress`, `completed`; defaults to `planned`.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectUpdate {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}
