//! Handlers for the console `/bookings` resource.
//!
//! Booking creation is a public storefront operation and lives in
//! [`crate::handlers::storefront`]; the console reads, transitions, and
//! grades bookings.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use estate_core::booking::{BookingStatus, LeadGrade};
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::booking::{Booking, BookingListQuery, BookingPage};
use estate_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub status: String,
}

/// Request body for `PUT /bookings/{id}/lead-grade`.
#[derive(Debug, Deserialize)]
pub struct LeadGradeRequest {
    pub lead_grade: String,
}

/// Load a booking and verify the caller owns the project it targets.
async fn owned_booking(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<Booking> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    crate::handlers::project::owned_project(state, user, booking.project_id).await?;
    Ok(booking)
}

/// GET /api/v1/bookings
///
/// Paged bookings across the caller's projects, with optional status filter
/// and free-text customer search.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<BookingListQuery>,
) -> AppResult<Json<BookingPage>> {
    if let Some(status) = params.status.as_deref() {
        BookingStatus::parse(status)?;
    }
    let page = BookingRepo::list_for_owner(&state.pool, auth_user.user_id, &params).await?;
    Ok(Json(page))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = owned_booking(&state, &auth_user, id).await?;
    Ok(Json(booking))
}

/// PUT /api/v1/bookings/{id}/status
///
/// Transition the booking and synchronize the unit's state in one
/// transaction. Illegal transitions (including anything out of `cancelled`)
/// yield 400.
pub async fn transition(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<TransitionRequest>,
) -> AppResult<Json<Booking>> {
    owned_booking(&state, &auth_user, id).await?;
    let target = BookingStatus::parse(&input.status)?;
    let booking = BookingRepo::transition(&state.pool, id, target).await?;
    Ok(Json(booking))
}

/// PUT /api/v1/bookings/{id}/lead-grade
pub async fn set_lead_grade(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<LeadGradeRequest>,
) -> AppResult<Json<Booking>> {
    owned_booking(&state, &auth_user, id).await?;
    let grade = LeadGrade::parse(&input.lead_grade)?;
    let booking = BookingRepo::set_lead_grade(&state.pool, id, grade)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}
