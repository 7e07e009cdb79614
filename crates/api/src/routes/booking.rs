//! Route definitions for the console `/bookings` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::list))
        .route("/{id}", get(booking::get_by_id))
        .route("/{id}/status", put(booking::transition))
        .route("/{id}/lead-grade", put(booking::set_lead_grade))
}
