//! Handler for the console dashboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use estate_db::models::booking::BookingCounts;
use estate_db::repositories::{BookingRepo, ProjectRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response payload for `GET /dashboard/stats`.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_projects: i64,
    pub active_projects: i64,
    pub bookings: BookingCounts,
}

/// GET /api/v1/dashboard/stats
///
/// Project and booking counts scoped to the caller's projects.
pub async fn stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DashboardStats>> {
    let (total_projects, active_projects) =
        ProjectRepo::counts(&state.pool, Some(auth_user.user_id)).await?;
    let bookings = BookingRepo::counts_for_owner(&state.pool, auth_user.user_id).await?;

    Ok(Json(DashboardStats {
        total_projects,
        active_projects,
        bookings,
    }))
}
