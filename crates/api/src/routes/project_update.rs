//! Route definitions for the `/updates` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::project_update;
use crate::state::AppState;

/// Routes mounted at `/updates`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(project_update::create))
        .route(
            "/{id}",
            put(project_update::update).delete(project_update::delete),
        )
}
