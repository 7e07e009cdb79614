//! Route definitions for the public storefront.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::storefront;
use crate::state::AppState;

/// Routes mounted at `/storefront`. All are public; booking creation is the
/// only write.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/{slug}", get(storefront::get_project))
        .route("/projects/{slug}/details", get(storefront::get_project_details))
        .route("/projects/{slug}/building", get(storefront::get_building))
        .route("/projects/{slug}/towers/{tower}", get(storefront::get_tower))
        .route(
            "/projects/{slug}/towers/{tower}/stats",
            get(storefront::get_tower_stats),
        )
        .route(
            "/projects/{slug}/towers/{tower}/floors/{n}",
            get(storefront::get_floor),
        )
        .route(
            "/projects/{slug}/towers/{tower}/floors/{n}/stats",
            get(storefront::get_floor_stats),
        )
        .route(
            "/projects/{slug}/towers/{tower}/floors/{n}/units/{unit}",
            get(storefront::get_unit),
        )
        .route("/projects/{slug}/amenities", get(storefront::list_amenities))
        .route("/projects/{slug}/updates", get(storefront::list_updates))
        .route("/projects/{slug}/units", get(storefront::filter_units))
        .route("/projects/{slug}/bookings", post(storefront::create_booking))
}
