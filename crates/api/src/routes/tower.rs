//! Route definitions for the `/towers` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::tower;
use crate::state::AppState;

/// Routes mounted at `/towers`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tower::create))
        .route(
            "/{id}",
            get(tower::get_by_id)
                .put(tower::update)
                .delete(tower::delete),
        )
        .route("/{id}/floors", get(tower::list_floors))
        .route("/{id}/plans", get(tower::list_plans).post(tower::create_plan))
        .route("/{id}/plans/{plan_id}", delete(tower::delete_plan))
}
