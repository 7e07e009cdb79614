//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use estate_core::error::CoreError;
use estate_core::roles::ROLE_ADMIN;
use estate_core::types::DbId;
use estate_db::models::amenity::Amenity;
use estate_db::models::building::Building;
use estate_db::models::floor_plan::FloorPlan;
use estate_db::models::project::{CreateProject, Project, ProjectWithPriceRange, UpdateProject};
use estate_db::models::project_update::ProjectUpdate;
use estate_db::models::tower::Tower;
use estate_db::models::unit_plan::UnitPlan;
use estate_db::repositories::{
    AmenityRepo, BuildingRepo, FloorPlanRepo, ProjectRepo, ProjectUpdateRepo, TowerRepo,
    UnitPlanRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /projects`. `user_id` comes from the token, never
/// from the body.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub registration_number: Option<String>,
    pub logo: Option<String>,
    pub qr_code: Option<String>,
}

/// Request body for `PUT /projects/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub active: bool,
}

/// Load a project and verify the caller owns it (admins bypass the check).
pub(crate) async fn owned_project(
    state: &AppState,
    user: &AuthUser,
    id: DbId,
) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    if project.user_id != user.user_id && user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this project".into(),
        )));
    }
    Ok(project)
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name is required".into(),
        )));
    }
    let input = CreateProject {
        user_id: auth_user.user_id,
        name: input.name,
        description: input.description,
        project_url: input.project_url,
        registration_number: input.registration_number,
        logo: input.logo,
        qr_code: input.qr_code,
    };
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// The caller's projects, each with its unit-plan price range.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<ProjectWithPriceRange>>> {
    let projects = ProjectRepo::list_by_user_with_prices(&state.pool, auth_user.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = owned_project(&state, &auth_user, id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    owned_project(&state, &auth_user, id).await?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<Project>> {
    owned_project(&state, &auth_user, id).await?;
    ProjectRepo::set_active(&state.pool, id, input.active).await?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Hard delete; the FK cascade removes the whole building/tower/floor/unit
/// subtree.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_project(&state, &auth_user, id).await?;
    ProjectRepo::hard_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Project-scoped child listings
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/buildings
pub async fn list_buildings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Building>>> {
    owned_project(&state, &auth_user, id).await?;
    let buildings = BuildingRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(buildings))
}

/// GET /api/v1/projects/{id}/towers
pub async fn list_towers(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Tower>>> {
    owned_project(&state, &auth_user, id).await?;
    let towers = TowerRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(towers))
}

/// GET /api/v1/projects/{id}/floor-plans
pub async fn list_floor_plans(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<FloorPlan>>> {
    owned_project(&state, &auth_user, id).await?;
    let plans = FloorPlanRepo::list_active_by_project(&state.pool, id).await?;
    Ok(Json(plans))
}

/// GET /api/v1/projects/{id}/unit-plans
pub async fn list_unit_plans(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<UnitPlan>>> {
    owned_project(&state, &auth_user, id).await?;
    let plans = UnitPlanRepo::list_active_by_project(&state.pool, id).await?;
    Ok(Json(plans))
}

/// GET /api/v1/projects/{id}/amenities
pub async fn list_amenities(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Amenity>>> {
    owned_project(&state, &auth_user, id).await?;
    let amenities = AmenityRepo::list_active_by_project(&state.pool, id).await?;
    Ok(Json(amenities))
}

/// GET /api/v1/projects/{id}/updates
pub async fn list_updates(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectUpdate>>> {
    owned_project(&state, &auth_user, id).await?;
    let updates = ProjectUpdateRepo::list_active_by_project(&state.pool, id).await?;
    Ok(Json(updates))
}
