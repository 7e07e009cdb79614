//! Company/admin account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// `password_hash` and the reset-token columns are never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub mobile: Option<String>,
    pub company: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub role: String,
    pub status: String,
    #[serde(skip_serializing)]
    pub reset_token_hash: Option<String>,
    #[serde(skip_serializing)]
    pub reset_token_expires_at: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// DTO for registering a new account. The password arrives in plaintext and
/// is hashed before it reaches the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub mobile: Option<String>,
    pub company: Option<String>,
    /// Defaults to `customer` if omitted.
    pub role: Option<String>,
}

/// DTO for updating a profile. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub company: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
}
