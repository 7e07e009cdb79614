//! Route definitions for media uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Multipart body limit. Covers the 100 MB walkthrough-video cap plus
/// multipart framing overhead; per-kind limits are enforced after parsing.
const UPLOAD_BODY_LIMIT: usize = 110 * 1024 * 1024;

/// Routes mounted at `/uploads`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{entity}", post(uploads::upload))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
