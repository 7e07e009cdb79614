//! HTTP-level integration tests for authentication and account management.
//!
//! Tests cover login, registration, the per-request account check, and the
//! password change flow.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use estate_api::auth::password::hash_password;
use estate_db::models::user::User;
use estate_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test account directly in the database and return the user row
/// plus the plaintext password used.
async fn create_test_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(pool, email, &hashed, "Test User", None, None, role)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in via the API and return the access token.
async fn login_token(app: axum::Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login response must carry an access token")
        .to_string()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with an access token and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "login@test.com", "customer").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "login@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "login@test.com");
    assert_eq!(json["user"]["role"], "customer");
}

/// Login with an incorrect password returns 401 with the error envelope.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_test_user(&pool, "wrongpw@test.com", "customer").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].is_string());
}

/// Login with an unknown email returns the same 401 as a bad password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "nobody@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A deactivated account cannot log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_account(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactive@test.com", "customer").await;
    UserRepo::set_status(&pool, user.id, "inactive")
        .await
        .expect("set_status should succeed");
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "inactive@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration creates a customer account and returns a usable token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_and_me(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "new@test.com",
        "password": "a-long-enough-password",
        "name": "New Customer",
        "mobile": "9876543210",
        "company": "Acme Homes"
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["user"]["role"], "customer");
    let token = json["access_token"].as_str().unwrap().to_string();

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = body_json(response).await;
    assert_eq!(me["email"], "new@test.com");
    assert_eq!(me["name"], "New Customer");
    // The password hash must never be serialized.
    assert!(me.get("password_hash").is_none());
}

/// Registering the same email twice yields a 409 conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "dup@test.com",
        "password": "a-long-enough-password",
        "name": "First"
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// A password below the minimum length is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_weak_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "weak@test.com",
        "password": "short",
        "name": "Weak"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Per-request account check
// ---------------------------------------------------------------------------

/// Requests without a token are rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Deactivating an account locks it out immediately, even though its token
/// is still cryptographically valid.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_user_rejected_per_request(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "lockout@test.com", "customer").await;
    let app = common::build_test_app(pool.clone());

    let token = login_token(app.clone(), "lockout@test.com", &password).await;

    let response = get_auth(app.clone(), "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    UserRepo::set_status(&pool, user.id, "suspended")
        .await
        .expect("set_status should succeed");

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Password change
// ---------------------------------------------------------------------------

/// Changing the password invalidates the old one and accepts the new one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_flow(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "change@test.com", "customer").await;
    let app = common::build_test_app(pool);

    let token = login_token(app.clone(), "change@test.com", &password).await;

    let body = serde_json::json!({
        "current_password": password,
        "new_password": "brand-new-password-42"
    });
    let response = post_json_auth(app.clone(), "/api/v1/auth/change-password", &token, body).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Old password no longer works.
    let body = serde_json::json!({ "email": "change@test.com", "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // New password does.
    login_token(app, "change@test.com", "brand-new-password-42").await;
}

/// Changing the password with a wrong current password fails with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_wrong_current(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "badcur@test.com", "customer").await;
    let app = common::build_test_app(pool);

    let token = login_token(app.clone(), "badcur@test.com", &password).await;

    let body = serde_json::json!({
        "current_password": "not-the-password",
        "new_password": "another-long-password"
    });
    let response = post_json_auth(app, "/api/v1/auth/change-password", &token, body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An unknown reset token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reset_password_bad_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "token": "00000000-0000-0000-0000-000000000000",
        "new_password": "whatever-is-long-enough"
    });
    let response = post_json(app, "/api/v1/auth/reset-password", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Requesting a reset for an unknown email still returns 204.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_reset_does_not_leak_accounts(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com" });
    let response = post_json(app, "/api/v1/auth/request-password-reset", body).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
