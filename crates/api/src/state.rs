use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: estate_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Object storage client; `None` disables media uploads.
    pub storage: Option<Arc<estate_storage::Storage>>,
    /// SMTP mailer; `None` disables outgoing mail.
    pub mailer: Option<Arc<estate_notify::Mailer>>,
}
