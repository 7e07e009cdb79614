//! HTTP-level integration tests for back-office booking management.
//!
//! Covers the status state machine and its unit-state side effects, lead
//! grading, owner scoping of the paged list, and the dashboard counters.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, put_json_auth};
use sqlx::PgPool;
use estate_api::auth::password::hash_password;
use estate_core::types::DbId;
use estate_db::models::building::CreateBuilding;
use estate_db::models::project::CreateProject;
use estate_db::models::tower::CreateTower;
use estate_db::models::unit::CreateUnit;
use estate_db::models::unit_plan::CreateUnitPlan;
use estate_db::repositories::{
    BuildingRepo, FloorRepo, ProjectRepo, TowerRepo, UnitPlanRepo, UnitRepo, UserRepo,
};

const OWNER_PASSWORD: &str = "owner-password-123!";

struct Fixture {
    unit_id: DbId,
    second_unit_id: DbId,
}

/// Seed a project with one tower, two units on Floor-1, and a login-capable
/// owner account.
async fn seed_project(pool: &PgPool, owner_email: &str, project_name: &str) -> Fixture {
    let hashed = hash_password(OWNER_PASSWORD).expect("hash");
    let owner = UserRepo::create(pool, owner_email, &hashed, "Owner", None, None, "customer")
        .await
        .expect("owner");

    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            user_id: owner.id,
            name: project_name.to_string(),
            description: None,
            project_url: None,
            registration_number: None,
            logo: None,
            qr_code: None,
        },
    )
    .await
    .expect("project");

    let building = BuildingRepo::create(
        pool,
        &CreateBuilding {
            project_id: project.id,
            name: "Phase 1".to_string(),
            image_url: None,
            svg_url: None,
        },
    )
    .await
    .expect("building");

    let tower = TowerRepo::create(
        pool,
        &CreateTower {
            building_id: building.id,
            name: "A".to_string(),
            floor_count: 1,
        },
    )
    .await
    .expect("tower");

    let floor = FloorRepo::find_by_tower_and_name(pool, tower.id, "Floor-1")
        .await
        .expect("query")
        .expect("Floor-1");

    let plan = UnitPlanRepo::create(
        pool,
        &CreateUnitPlan {
            project_id: project.id,
            name: "Standard 2BHK".to_string(),
            type_label: "2BHK".to_string(),
            area: 900,
            cost: Some(6_000_000),
            image_url: None,
            svg_url: None,
            vr_url: None,
        },
    )
    .await
    .expect("plan");

    let mut units = Vec::new();
    for name in ["A-101", "A-102"] {
        let unit = UnitRepo::create(
            pool,
            &CreateUnit {
                floor_id: floor.id,
                name: name.to_string(),
                slug: None,
                cost: None,
                state: None,
            },
        )
        .await
        .expect("unit");
        UnitRepo::map_plan(pool, unit.id, plan.id)
            .await
            .expect("map plan");
        units.push(unit.id);
    }

    Fixture {
        unit_id: units[0],
        second_unit_id: units[1],
    }
}

async fn login(app: axum::Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": OWNER_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"].as_str().expect("token").to_string()
}

/// Book a unit through the storefront and return the booking id.
async fn book_unit(app: axum::Router, slug: &str, unit_id: DbId, email: &str) -> DbId {
    let body = serde_json::json!({
        "email": email,
        "first_name": "Asha",
        "last_name": "Rao",
        "mobile": "9876543210",
        "unit_id": unit_id
    });
    let response = post_json(app, &format!("/api/v1/storefront/projects/{slug}/bookings"), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().expect("booking id")
}

async fn unit_state(pool: &PgPool, id: DbId) -> i32 {
    UnitRepo::find_by_id(pool, id)
        .await
        .expect("query")
        .expect("unit")
        .state
}

// ---------------------------------------------------------------------------
// Status transitions and unit-state sync
// ---------------------------------------------------------------------------

/// Confirming a booking reserves the unit; cancelling releases it again.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_confirm_and_cancel_sync_unit_state(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    let app = common::build_test_app(pool.clone());

    let booking_id = book_unit(app.clone(), "Riverside", fixture.unit_id, "buyer@test.com").await;
    assert_eq!(unit_state(&pool, fixture.unit_id).await, 1);

    let token = login(app.clone(), "owner@test.com").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/bookings/{booking_id}/status"),
        &token,
        serde_json::json!({ "status": "confirmed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "confirmed");
    assert_eq!(unit_state(&pool, fixture.unit_id).await, 2);

    let response = put_json_auth(
        app,
        &format!("/api/v1/bookings/{booking_id}/status"),
        &token,
        serde_json::json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(unit_state(&pool, fixture.unit_id).await, 1);
}

/// Cancelled is terminal; nothing moves a booking out of it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cancelled_is_terminal(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    let app = common::build_test_app(pool);

    let booking_id = book_unit(app.clone(), "Riverside", fixture.unit_id, "buyer@test.com").await;
    let token = login(app.clone(), "owner@test.com").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/bookings/{booking_id}/status"),
        &token,
        serde_json::json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    for target in ["confirmed", "pending"] {
        let response = put_json_auth(
            app.clone(),
            &format!("/api/v1/bookings/{booking_id}/status"),
            &token,
            serde_json::json!({ "status": target }),
        )
        .await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "cancelled -> {target} must be rejected"
        );
    }
}

/// An unknown status string is rejected before any lookup.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_status_rejected(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    let app = common::build_test_app(pool);

    let booking_id = book_unit(app.clone(), "Riverside", fixture.unit_id, "buyer@test.com").await;
    let token = login(app.clone(), "owner@test.com").await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/bookings/{booking_id}/status"),
        &token,
        serde_json::json!({ "status": "approved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// Cancelling an active booking frees the unit for a fresh booking.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_rebooking_after_cancellation(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    let app = common::build_test_app(pool);

    let booking_id = book_unit(app.clone(), "Riverside", fixture.unit_id, "first@test.com").await;
    let token = login(app.clone(), "owner@test.com").await;

    put_json_auth(
        app.clone(),
        &format!("/api/v1/bookings/{booking_id}/status"),
        &token,
        serde_json::json!({ "status": "cancelled" }),
    )
    .await;

    book_unit(app, "Riverside", fixture.unit_id, "second@test.com").await;
}

// ---------------------------------------------------------------------------
// Lead grading
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_lead_grade(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    let app = common::build_test_app(pool);

    let booking_id = book_unit(app.clone(), "Riverside", fixture.unit_id, "buyer@test.com").await;
    let token = login(app.clone(), "owner@test.com").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/bookings/{booking_id}/lead-grade"),
        &token,
        serde_json::json!({ "lead_grade": "hot" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["lead_grade"], "hot");

    let response = put_json_auth(
        app,
        &format!("/api/v1/bookings/{booking_id}/lead-grade"),
        &token,
        serde_json::json!({ "lead_grade": "lukewarm" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing and scoping
// ---------------------------------------------------------------------------

/// The list is paged and supports status filter and customer search.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filter_and_search(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    let app = common::build_test_app(pool);

    let first = book_unit(app.clone(), "Riverside", fixture.unit_id, "asha@test.com").await;
    book_unit(app.clone(), "Riverside", fixture.second_unit_id, "vikram@test.com").await;

    let token = login(app.clone(), "owner@test.com").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/bookings/{first}/status"),
        &token,
        serde_json::json!({ "status": "confirmed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), "/api/v1/bookings", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["page"], 1);
    assert_eq!(json["bookings"].as_array().unwrap().len(), 2);

    let response = get_auth(app.clone(), "/api/v1/bookings?status=confirmed", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["bookings"][0]["id"], first);

    let response = get_auth(app.clone(), "/api/v1/bookings?search=vikram", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);

    let response = get_auth(app, "/api/v1/bookings?status=approved", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Bookings are visible only to the owner of the project they belong to.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_scoping(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    seed_project(&pool, "other@test.com", "Lakeside").await;
    let app = common::build_test_app(pool);

    let booking_id = book_unit(app.clone(), "Riverside", fixture.unit_id, "buyer@test.com").await;

    let other_token = login(app.clone(), "other@test.com").await;
    let response = get_auth(app.clone(), "/api/v1/bookings", &other_token).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);

    let response = get_auth(
        app.clone(),
        &format!("/api/v1/bookings/{booking_id}"),
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        app,
        &format!("/api/v1/bookings/{booking_id}/status"),
        &other_token,
        serde_json::json!({ "status": "confirmed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Anonymous access to the console list is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/bookings").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_stats(pool: PgPool) {
    let fixture = seed_project(&pool, "owner@test.com", "Riverside").await;
    let app = common::build_test_app(pool.clone());

    let first = book_unit(app.clone(), "Riverside", fixture.unit_id, "a@test.com").await;
    book_unit(app.clone(), "Riverside", fixture.second_unit_id, "b@test.com").await;

    let token = login(app.clone(), "owner@test.com").await;
    put_json_auth(
        app.clone(),
        &format!("/api/v1/bookings/{first}/status"),
        &token,
        serde_json::json!({ "status": "confirmed" }),
    )
    .await;

    let response = get_auth(app.clone(), "/api/v1/dashboard/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_projects"], 1);
    assert_eq!(json["active_projects"], 1);
    assert_eq!(json["bookings"]["pending"], 1);
    assert_eq!(json["bookings"]["confirmed"], 1);
    assert_eq!(json["bookings"]["cancelled"], 0);

    // The second owner sees an empty dashboard.
    seed_project(&pool, "other@test.com", "Lakeside").await;
    let other_token = login(app.clone(), "other@test.com").await;
    let response = get_auth(app, "/api/v1/dashboard/stats", &other_token).await;
    let json = body_json(response).await;
    assert_eq!(json["total_projects"], 1);
    assert_eq!(json["bookings"]["pending"], 0);
}
