//! Error type for repository operations that mix database failures with
//! domain rule violations (booking writes, mostly).

use estate_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
