//! Route definitions for the `/amenities` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::amenity;
use crate::state::AppState;

/// Routes mounted at `/amenities`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(amenity::create))
        .route("/{id}", put(amenity::update).delete(amenity::delete))
}
