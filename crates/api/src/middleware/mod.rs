//! Authentication middleware extractors.
//!
//! [`auth::AuthUser`] extracts and re-verifies the authenticated user from a
//! JWT Bearer token. Resource-level authorization (project ownership, admin
//! override) lives with the handlers.

pub mod auth;
