//! Handlers for the `/towers` resource, including tower plans.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::floor::Floor;
use estate_db::models::tower::{CreateTower, Tower, UpdateTower};
use estate_db::models::tower_plan::{CreateTowerPlan, TowerPlan};
use estate_db::repositories::{BuildingRepo, FloorRepo, TowerPlanRepo, TowerRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Load a tower and verify the caller owns its project.
async fn owned_tower(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<Tower> {
    let tower = TowerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tower",
            id,
        }))?;
    let building = BuildingRepo::find_by_id(&state.pool, tower.building_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: tower.building_id,
        }))?;
    owned_project(state, user, building.project_id).await?;
    Ok(tower)
}

/// POST /api/v1/towers
///
/// Creating a tower also creates `floor_count` floors named `Floor-1`
/// through `Floor-<n>` in the same transaction.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateTower>,
) -> AppResult<(StatusCode, Json<Tower>)> {
    if input.floor_count < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "floor_count must be at least 1".into(),
        )));
    }
    let building = BuildingRepo::find_by_id(&state.pool, input.building_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: input.building_id,
        }))?;
    owned_project(&state, &auth_user, building.project_id).await?;
    let tower = TowerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tower)))
}

/// GET /api/v1/towers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tower>> {
    let tower = owned_tower(&state, &auth_user, id).await?;
    Ok(Json(tower))
}

/// PUT /api/v1/towers/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTower>,
) -> AppResult<Json<Tower>> {
    owned_tower(&state, &auth_user, id).await?;
    let tower = TowerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tower",
            id,
        }))?;
    Ok(Json(tower))
}

/// DELETE /api/v1/towers/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_tower(&state, &auth_user, id).await?;
    TowerRepo::hard_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/towers/{id}/floors
pub async fn list_floors(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Floor>>> {
    owned_tower(&state, &auth_user, id).await?;
    let floors = FloorRepo::list_by_tower(&state.pool, id).await?;
    Ok(Json(floors))
}

// ---------------------------------------------------------------------------
// Tower plans (selection-view images)
// ---------------------------------------------------------------------------

/// POST /api/v1/towers/{id}/plans
pub async fn create_plan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateTowerPlan>,
) -> AppResult<(StatusCode, Json<TowerPlan>)> {
    owned_tower(&state, &auth_user, id).await?;
    let input = CreateTowerPlan {
        tower_id: id,
        ..input
    };
    let plan = TowerPlanRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/towers/{id}/plans
pub async fn list_plans(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<TowerPlan>>> {
    owned_tower(&state, &auth_user, id).await?;
    let plans = TowerPlanRepo::list_by_tower(&state.pool, id).await?;
    Ok(Json(plans))
}

/// DELETE /api/v1/towers/{tower_id}/plans/{plan_id}
pub async fn delete_plan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((tower_id, plan_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    owned_tower(&state, &auth_user, tower_id).await?;
    let deleted = TowerPlanRepo::hard_delete(&state.pool, plan_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TowerPlan",
            id: plan_id,
        }))
    }
}
