//! Route definitions for the `/unit-plans` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::unit_plan;
use crate::state::AppState;

/// Routes mounted at `/unit-plans`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(unit_plan::create))
        .route(
            "/{id}",
            get(unit_plan::get_by_id)
                .put(unit_plan::update)
                .delete(unit_plan::delete),
        )
        .route(
            "/{id}/balcony-images",
            get(unit_plan::list_balcony_images).post(unit_plan::add_balcony_image),
        )
        .route(
            "/{id}/balcony-images/{image_id}",
            delete(unit_plan::delete_balcony_image),
        )
}
