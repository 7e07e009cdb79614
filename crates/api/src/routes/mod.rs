pub mod amenity;
pub mod auth;
pub mod booking;
pub mod building;
pub mod dashboard;
pub mod floor;
pub mod floor_plan;
pub mod health;
pub mod project;
pub mod project_update;
pub mod storefront;
pub mod tower;
pub mod unit;
pub mod unit_plan;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /storefront/projects/{slug}                                  project by slug (public)
/// /storefront/projects/{slug}/details                          project + amenities + updates
/// /storefront/projects/{slug}/building                         most-recent building
/// /storefront/projects/{slug}/towers/{tower}                   tower view
/// /storefront/projects/{slug}/towers/{tower}/stats             occupancy stats
/// /storefront/projects/{slug}/towers/{tower}/floors/{n}        floor view
/// /storefront/projects/{slug}/towers/{tower}/floors/{n}/stats  floor stats
/// /storefront/projects/{slug}/towers/{tower}/floors/{n}/units/{unit}  unit lookup
/// /storefront/projects/{slug}/amenities                        active amenities
/// /storefront/projects/{slug}/updates                          project updates
/// /storefront/projects/{slug}/units?tower=..&floor=..          inventory filter
/// /storefront/projects/{slug}/bookings                         booking creation (POST)
///
/// /auth/login                      login (public)
/// /auth/register                   register (public)
/// /auth/request-password-reset     request reset token (public)
/// /auth/reset-password             consume reset token (public)
/// /auth/change-password            change password (requires auth)
/// /auth/me                         profile (GET), update (PUT /auth/profile)
///
/// /projects                        list, create
/// /projects/{id}                   get, update, delete
/// /projects/{id}/status            toggle active (PUT)
/// /projects/{id}/buildings         project's buildings
/// /projects/{id}/towers            project's towers
/// /projects/{id}/floor-plans       active floor plans
/// /projects/{id}/unit-plans        active unit plans
/// /projects/{id}/amenities         active amenities
/// /projects/{id}/updates           active updates
///
/// /buildings                       create
/// /buildings/{id}                  get, update, delete
///
/// /towers                          create (auto-creates floors)
/// /towers/{id}                     get, update, delete
/// /towers/{id}/floors              tower's floors
/// /towers/{id}/plans               list, create tower plans
/// /towers/{id}/plans/{plan_id}     delete tower plan
///
/// /floors/{id}                     get, rename, delete
/// /floors/{id}/plan                assign floor plan + bulk-create units (POST)
/// /floors/{id}/units               floor's units
///
/// /floor-plans                     create
/// /floor-plans/{id}                get, soft delete
///
/// /units                           create
/// /units/{id}                      get detail, update, delete
/// /units/{id}/state                set state (PUT)
/// /units/{id}/plan                 map unit plan (PUT)
/// /unit-statuses                   status lookup table
///
/// /unit-plans                      create
/// /unit-plans/{id}                 get, update, soft delete
/// /unit-plans/{id}/balcony-images  list, add
/// /unit-plans/{id}/balcony-images/{image_id}  delete
///
/// /amenities                       create
/// /amenities/{id}                  update, soft delete
///
/// /updates                         create
/// /updates/{id}                    update, soft delete
///
/// /bookings                        paged list (?status, ?search, ?page, ?limit)
/// /bookings/{id}                   get
/// /bookings/{id}/status            transition + unit-state sync (PUT)
/// /bookings/{id}/lead-grade        grade lead (PUT)
///
/// /dashboard/stats                 project + booking counts
///
/// /uploads/{entity}                multipart media upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public storefront (no authentication).
        .nest("/storefront", storefront::router())
        // Authentication and account management.
        .nest("/auth", auth::router())
        // Console resources (JWT authenticated via extractors).
        .nest("/projects", project::router())
        .nest("/buildings", building::router())
        .nest("/towers", tower::router())
        .nest("/floors", floor::router())
        .nest("/floor-plans", floor_plan::router())
        .merge(unit::router())
        .nest("/unit-plans", unit_plan::router())
        .nest("/amenities", amenity::router())
        .nest("/updates", project_update::router())
        .nest("/bookings", booking::router())
        .nest("/dashboard", dashboard::router())
        .nest("/uploads", uploads::router())
}
