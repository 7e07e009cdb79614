//! Handlers for the `/buildings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::building::{Building, CreateBuilding, UpdateBuilding};
use estate_db::repositories::BuildingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/buildings
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateBuilding>,
) -> AppResult<(StatusCode, Json<Building>)> {
    owned_project(&state, &auth_user, input.project_id).await?;
    let building = BuildingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(building)))
}

/// GET /api/v1/buildings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Building>> {
    let building = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }))?;
    owned_project(&state, &auth_user, building.project_id).await?;
    Ok(Json(building))
}

/// PUT /api/v1/buildings/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBuilding>,
) -> AppResult<Json<Building>> {
    let existing = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }))?;
    owned_project(&state, &auth_user, existing.project_id).await?;
    let building = BuildingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }))?;
    Ok(Json(building))
}

/// DELETE /api/v1/buildings/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let building = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }))?;
    owned_project(&state, &auth_user, building.project_id).await?;
    BuildingRepo::hard_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
