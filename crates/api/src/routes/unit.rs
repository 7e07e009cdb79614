//! Route definitions for the `/units` resource and the status lookup table.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::unit;
use crate::state::AppState;

/// Routes for `/units` and `/unit-statuses`. Merged (not nested) so both
/// prefixes can live in one place.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/units", post(unit::create))
        .route(
            "/units/{id}",
            get(unit::get_by_id).put(unit::update).delete(unit::delete),
        )
        .route("/units/{id}/state", put(unit::set_state))
        .route("/units/{id}/plan", put(unit::map_plan))
        .route("/unit-statuses", get(unit::list_statuses))
}
