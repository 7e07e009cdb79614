//! Route definitions for the `/floors` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::floor;
use crate::state::AppState;

/// Routes mounted at `/floors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(floor::get_by_id)
                .put(floor::rename)
                .delete(floor::delete),
        )
        .route("/{id}/plan", post(floor::assign_plan))
        .route("/{id}/units", get(floor::list_units))
}
