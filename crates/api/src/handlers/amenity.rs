//! Handlers for the `/amenities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};
use estate_db::repositories::AmenityRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/amenities
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateAmenity>,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    owned_project(&state, &auth_user, input.project_id).await?;
    let amenity = AmenityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(amenity)))
}

/// PUT /api/v1/amenities/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAmenity>,
) -> AppResult<Json<Amenity>> {
    let existing = AmenityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    owned_project(&state, &auth_user, existing.project_id).await?;
    let amenity = AmenityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    Ok(Json(amenity))
}

/// DELETE /api/v1/amenities/{id}
///
/// Soft delete; the row survives but drops out of active listings.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let amenity = AmenityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    owned_project(&state, &auth_user, amenity.project_id).await?;
    AmenityRepo::soft_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
