//! Route definitions for the `/buildings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::building;
use crate::state::AppState;

/// Routes mounted at `/buildings`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(building::create))
        .route(
            "/{id}",
            get(building::get_by_id)
                .put(building::update)
                .delete(building::delete),
        )
}
