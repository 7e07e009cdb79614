//! Route definitions for the `/auth` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login                   -> login
/// POST /register                -> register
/// POST /change-password         -> change_password (requires auth)
/// POST /request-password-reset  -> request_password_reset
/// POST /reset-password          -> reset_password
/// GET  /me                      -> me (requires auth)
/// PUT  /profile                 -> update_profile (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/change-password", post(auth::change_password))
        .route("/request-password-reset", post(auth::request_password_reset))
        .route("/reset-password", post(auth::reset_password))
        .route("/me", get(auth::me))
        .route("/profile", put(auth::update_profile))
}
