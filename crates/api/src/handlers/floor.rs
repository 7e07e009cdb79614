//! Handlers for the `/floors` resource, including floor-plan assignment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::floor::Floor;
use estate_db::models::unit::Unit;
use estate_db::repositories::{BuildingRepo, FloorPlanRepo, FloorRepo, TowerRepo, UnitRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /floors/{id}/plan`.
#[derive(Debug, Deserialize)]
pub struct AssignPlanRequest {
    pub floor_plan_id: DbId,
}

/// Request body for `PUT /floors/{id}`.
#[derive(Debug, Deserialize)]
pub struct RenameFloorRequest {
    pub name: String,
}

/// Load a floor and verify the caller owns the project it belongs to.
pub(crate) async fn owned_floor(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<Floor> {
    let floor = FloorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Floor",
            id,
        }))?;
    let tower = TowerRepo::find_by_id(&state.pool, floor.tower_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tower",
            id: floor.tower_id,
        }))?;
    let building = BuildingRepo::find_by_id(&state.pool, tower.building_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: tower.building_id,
        }))?;
    owned_project(state, user, building.project_id).await?;
    Ok(floor)
}

/// GET /api/v1/floors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Floor>> {
    let floor = owned_floor(&state, &auth_user, id).await?;
    Ok(Json(floor))
}

/// POST /api/v1/floors/{id}/plan
///
/// Assign a floor plan to the floor and bulk-create its units. The whole
/// operation is transactional; an unknown or inactive plan yields 404 with
/// nothing written.
pub async fn assign_plan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AssignPlanRequest>,
) -> AppResult<Json<Floor>> {
    let floor = owned_floor(&state, &auth_user, id).await?;
    if floor.floor_plan_id.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Floor already has a plan assigned".into(),
        )));
    }
    // Reject plans belonging to a project the caller cannot see.
    let plan = FloorPlanRepo::find_by_id(&state.pool, input.floor_plan_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FloorPlan",
            id: input.floor_plan_id,
        }))?;
    owned_project(&state, &auth_user, plan.project_id).await?;

    let floor = FloorRepo::assign_plan(&state.pool, id, input.floor_plan_id).await?;
    Ok(Json(floor))
}

/// PUT /api/v1/floors/{id}
pub async fn rename(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<RenameFloorRequest>,
) -> AppResult<Json<Floor>> {
    owned_floor(&state, &auth_user, id).await?;
    let floor = FloorRepo::rename(&state.pool, id, &input.name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Floor",
            id,
        }))?;
    Ok(Json(floor))
}

/// DELETE /api/v1/floors/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_floor(&state, &auth_user, id).await?;
    FloorRepo::hard_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/floors/{id}/units
pub async fn list_units(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Unit>>> {
    owned_floor(&state, &auth_user, id).await?;
    let units = UnitRepo::list_by_floor(&state.pool, id).await?;
    Ok(Json(units))
}
