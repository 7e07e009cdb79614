//! Route definitions for the `/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/status", put(project::set_status))
        .route("/{id}/buildings", get(project::list_buildings))
        .route("/{id}/towers", get(project::list_towers))
        .route("/{id}/floor-plans", get(project::list_floor_plans))
        .route("/{id}/unit-plans", get(project::list_unit_plans))
        .route("/{id}/amenities", get(project::list_amenities))
        .route("/{id}/updates", get(project::list_updates))
}
