//! Handlers for the `/floor-plans` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::floor_plan::{CreateFloorPlan, FloorPlan};
use estate_db::repositories::FloorPlanRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/floor-plans
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateFloorPlan>,
) -> AppResult<(StatusCode, Json<FloorPlan>)> {
    owned_project(&state, &auth_user, input.project_id).await?;
    if input.unit_count < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "unit_count must be at least 1".into(),
        )));
    }
    let plan = FloorPlanRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/floor-plans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<FloorPlan>> {
    let plan = FloorPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FloorPlan",
            id,
        }))?;
    owned_project(&state, &auth_user, plan.project_id).await?;
    Ok(Json(plan))
}

/// DELETE /api/v1/floor-plans/{id}
///
/// Soft delete; floors already built from the plan keep their units.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let plan = FloorPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FloorPlan",
            id,
        }))?;
    owned_project(&state, &auth_user, plan.project_id).await?;
    FloorPlanRepo::soft_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
