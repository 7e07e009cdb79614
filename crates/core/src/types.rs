//! Shared scalar aliases used across every crate in the workspace.

/// Primary keys are PostgreSQL BIGSERIAL columns.
pub type DbId = i64;

/// Timestamps are stored and exchanged in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
