//! Handlers for the `/units` resource and the unit-status lookup table.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_core::unit_state::UnitState;
use estate_db::models::unit::{CreateUnit, Unit, UnitDetail, UpdateUnit};
use estate_db::models::unit_status::UnitStatusRow;
use estate_db::repositories::{UnitRepo, UnitStatusRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::floor::owned_floor;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /units/{id}/state`.
#[derive(Debug, Deserialize)]
pub struct SetStateRequest {
    /// Raw state code (1 available, 2 booked, 3 hold, 4 blocked).
    pub state: i32,
}

/// Request body for `PUT /units/{id}/plan`.
#[derive(Debug, Deserialize)]
pub struct MapPlanRequest {
    pub unit_plan_id: DbId,
}

/// Load a unit and verify the caller owns the project it belongs to.
async fn owned_unit(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<Unit> {
    let unit = UnitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    owned_floor(state, user, unit.floor_id).await?;
    Ok(unit)
}

/// POST /api/v1/units
///
/// Manual unit creation; most units are bulk-created by plan assignment.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateUnit>,
) -> AppResult<(StatusCode, Json<Unit>)> {
    owned_floor(&state, &auth_user, input.floor_id).await?;
    if let Some(code) = input.state {
        UnitState::from_code(code)?;
    }
    let unit = UnitRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// GET /api/v1/units/{id}
///
/// Unit joined with its status and plan.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UnitDetail>> {
    owned_unit(&state, &auth_user, id).await?;
    let detail = UnitRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/units/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUnit>,
) -> AppResult<Json<Unit>> {
    owned_unit(&state, &auth_user, id).await?;
    if let Some(code) = input.state {
        UnitState::from_code(code)?;
    }
    let unit = UnitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(unit))
}

/// PUT /api/v1/units/{id}/state
pub async fn set_state(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetStateRequest>,
) -> AppResult<Json<Unit>> {
    owned_unit(&state, &auth_user, id).await?;
    let target = UnitState::from_code(input.state)?;
    let unit = UnitRepo::set_state(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(unit))
}

/// PUT /api/v1/units/{id}/plan
///
/// Map a unit plan onto the unit; the plan's base cost fills in unless the
/// unit already has a per-unit override.
pub async fn map_plan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<MapPlanRequest>,
) -> AppResult<Json<Unit>> {
    owned_unit(&state, &auth_user, id).await?;
    let unit = UnitRepo::map_plan(&state.pool, id, input.unit_plan_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(unit))
}

/// DELETE /api/v1/units/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_unit(&state, &auth_user, id).await?;
    UnitRepo::hard_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/unit-statuses
pub async fn list_statuses(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<Vec<UnitStatusRow>>> {
    let statuses = UnitStatusRepo::list_active(&state.pool).await?;
    Ok(Json(statuses))
}
