//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub website_link: Option<String>,
    pub registration_number: Option<String>,
    pub active: bool,
    pub logo: Option<String>,
    pub qr_code: Option<String>,
    pub location: Option<String>,
    pub location_title: Option<String>,
    pub location_description: Option<String>,
    pub location_image: Option<String>,
    pub location_logo: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub walkthrough_video: Option<String>,
    pub home_location_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. The slug is derived from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub registration_number: Option<String>,
    pub logo: Option<String>,
    pub qr_code: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub website_link: Option<String>,
    pub registration_number: Option<String>,
    pub logo: Option<String>,
    pub qr_code: Option<String>,
    pub location: Option<String>,
    pub location_title: Option<String>,
    pub location_description: Option<String>,
    pub location_image: Option<String>,
    pub location_logo: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub walkthrough_video: Option<String>,
    pub home_location_description: Option<String>,
}

/// Project row plus the min/max unit-plan cost across the project, as shown
/// in the console's project list.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithPriceRange {
    #[serde(flatten)]
    pub project: Project,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
}
