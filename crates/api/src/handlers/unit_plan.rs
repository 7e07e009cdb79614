//! Handlers for the `/unit-plans` resource, including balcony images.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::unit_plan::{
    BalconyImage, CreateBalconyImage, CreateUnitPlan, UnitPlan, UpdateUnitPlan,
};
use estate_db::repositories::UnitPlanRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Load a unit plan and verify the caller owns its project.
async fn owned_plan(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<UnitPlan> {
    let plan = UnitPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UnitPlan",
            id,
        }))?;
    owned_project(state, user, plan.project_id).await?;
    Ok(plan)
}

/// POST /api/v1/unit-plans
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateUnitPlan>,
) -> AppResult<(StatusCode, Json<UnitPlan>)> {
    owned_project(&state, &auth_user, input.project_id).await?;
    if input.area < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "area must be a positive number of square feet".into(),
        )));
    }
    let plan = UnitPlanRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/unit-plans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UnitPlan>> {
    let plan = owned_plan(&state, &auth_user, id).await?;
    Ok(Json(plan))
}

/// PUT /api/v1/unit-plans/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUnitPlan>,
) -> AppResult<Json<UnitPlan>> {
    owned_plan(&state, &auth_user, id).await?;
    let plan = UnitPlanRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UnitPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// DELETE /api/v1/unit-plans/{id}
///
/// Soft delete; units already mapped to the plan keep their reference.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_plan(&state, &auth_user, id).await?;
    UnitPlanRepo::soft_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Balcony images
// ---------------------------------------------------------------------------

/// POST /api/v1/unit-plans/{id}/balcony-images
pub async fn add_balcony_image(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateBalconyImage>,
) -> AppResult<(StatusCode, Json<BalconyImage>)> {
    owned_plan(&state, &auth_user, id).await?;
    let image = UnitPlanRepo::add_balcony_image(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// GET /api/v1/unit-plans/{id}/balcony-images
pub async fn list_balcony_images(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BalconyImage>>> {
    owned_plan(&state, &auth_user, id).await?;
    let images = UnitPlanRepo::list_balcony_images(&state.pool, id).await?;
    Ok(Json(images))
}

/// DELETE /api/v1/unit-plans/{plan_id}/balcony-images/{image_id}
pub async fn delete_balcony_image(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((plan_id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    owned_plan(&state, &auth_user, plan_id).await?;
    let deleted = UnitPlanRepo::delete_balcony_image(&state.pool, image_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BalconyImage",
            id: image_id,
        }))
    }
}
