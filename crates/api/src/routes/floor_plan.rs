//! Route definitions for the `/floor-plans` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::floor_plan;
use crate::state::AppState;

/// Routes mounted at `/floor-plans`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(floor_plan::create))
        .route(
            "/{id}",
            get(floor_plan::get_by_id).delete(floor_plan::delete),
        )
}
