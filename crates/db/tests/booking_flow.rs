//! Integration tests for the booking lifecycle: creation guards, status
//! transitions, and unit-state synchronization.

use assert_matches::assert_matches;
use sqlx::PgPool;

use estate_core::booking::{BookingStatus, LeadGrade};
use estate_core::error::CoreError;
use estate_core::unit_state::UnitState;
use estate_db::error::DbError;
use estate_db::models::booking::{BookingListQuery, CreateBooking};
use estate_db::models::building::CreateBuilding;
use estate_db::models::project::CreateProject;
use estate_db::models::tower::CreateTower;
use estate_db::models::unit::CreateUnit;
use estate_db::repositories::{
    BookingRepo, BuildingRepo, FloorRepo, ProjectRepo, TowerRepo, UnitRepo, UserRepo,
};

struct Fixture {
    owner_id: i64,
    project_id: i64,
    unit_id: i64,
}

/// Seed owner -> project -> building -> tower (1 floor) -> one unit.
async fn seed(pool: &PgPool) -> Fixture {
    let owner = UserRepo::create(
        pool,
        "owner@example.com",
        "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$hash",
        "Owner",
        None,
        None,
        "admin",
    )
    .await
    .unwrap();
    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            user_id: owner.id,
            name: "Booking Fixture".to_string(),
            description: None,
            project_url: None,
            registration_number: None,
            logo: None,
            qr_code: None,
        },
    )
    .await
    .unwrap();
    let building = BuildingRepo::create(
        pool,
        &CreateBuilding {
            project_id: project.id,
            name: "Main".to_string(),
            image_url: None,
            svg_url: None,
        },
    )
    .await
    .unwrap();
    let tower = TowerRepo::create(
        pool,
        &CreateTower {
            building_id: building.id,
            name: "A".to_string(),
            floor_count: 1,
        },
    )
    .await
    .unwrap();
    let floor = FloorRepo::find_by_tower_and_name(pool, tower.id, "Floor-1")
        .await
        .unwrap()
        .unwrap();
    let unit = UnitRepo::create(
        pool,
        &CreateUnit {
            floor_id: floor.id,
            name: "A-101".to_string(),
            slug: None,
            cost: None,
            state: None,
        },
    )
    .await
    .unwrap();

    Fixture {
        owner_id: owner.id,
        project_id: project.id,
        unit_id: unit.id,
    }
}

fn new_booking(unit_id: i64) -> CreateBooking {
    CreateBooking {
        email: "buyer@example.com".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        mobile: "9876543210".to_string(),
        unit_id,
    }
}

#[sqlx::test]
async fn test_create_pending_leaves_unit_available(pool: PgPool) {
    let fx = seed(&pool).await;

    let booking = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();
    assert_eq!(booking.status, "pending");
    assert_eq!(booking.project_id, fx.project_id);
    assert_eq!(booking.unit_id, fx.unit_id);

    // Creation must not reserve the unit.
    let unit = UnitRepo::find_by_id(&pool, fx.unit_id).await.unwrap().unwrap();
    assert_eq!(unit.state, UnitState::Available.code());
}

#[sqlx::test]
async fn test_second_booking_on_pending_unit_conflicts(pool: PgPool) {
    let fx = seed(&pool).await;

    BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();
    let second = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id)).await;
    assert_matches!(second, Err(DbError::Core(CoreError::Conflict(_))));
}

#[sqlx::test]
async fn test_booking_unknown_unit_not_found(pool: PgPool) {
    seed(&pool).await;

    let result = BookingRepo::create_pending(&pool, &new_booking(999_999)).await;
    assert_matches!(
        result,
        Err(DbError::Core(CoreError::NotFound { entity: "Unit", .. }))
    );
}

#[sqlx::test]
async fn test_confirm_books_unit(pool: PgPool) {
    let fx = seed(&pool).await;
    let booking = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();

    let confirmed = BookingRepo::transition(&pool, booking.id, BookingStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(confirmed.status, "confirmed");

    let unit = UnitRepo::find_by_id(&pool, fx.unit_id).await.unwrap().unwrap();
    assert_eq!(unit.state, UnitState::Booked.code());

    // Booked units reject new bookings.
    let blocked = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id)).await;
    assert_matches!(blocked, Err(DbError::Core(CoreError::Conflict(_))));
}

#[sqlx::test]
async fn test_cancel_releases_unit(pool: PgPool) {
    let fx = seed(&pool).await;
    let booking = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();
    BookingRepo::transition(&pool, booking.id, BookingStatus::Confirmed)
        .await
        .unwrap();

    let cancelled = BookingRepo::transition(&pool, booking.id, BookingStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(cancelled.status, "cancelled");

    let unit = UnitRepo::find_by_id(&pool, fx.unit_id).await.unwrap().unwrap();
    assert_eq!(unit.state, UnitState::Available.code());

    // The unit is bookable again once the old booking is cancelled.
    BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();
}

#[sqlx::test]
async fn test_cancelled_is_terminal(pool: PgPool) {
    let fx = seed(&pool).await;
    let booking = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();
    BookingRepo::transition(&pool, booking.id, BookingStatus::Cancelled)
        .await
        .unwrap();

    let result = BookingRepo::transition(&pool, booking.id, BookingStatus::Confirmed).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    // The rejected transition must not have touched the unit.
    let unit = UnitRepo::find_by_id(&pool, fx.unit_id).await.unwrap().unwrap();
    assert_eq!(unit.state, UnitState::Available.code());
}

#[sqlx::test]
async fn test_lead_grade_and_listing(pool: PgPool) {
    let fx = seed(&pool).await;
    let booking = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();

    let graded = BookingRepo::set_lead_grade(&pool, booking.id, LeadGrade::Hot)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.lead_grade.as_deref(), Some("hot"));

    let page = BookingRepo::list_for_owner(&pool, fx.owner_id, &BookingListQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.bookings.len(), 1);
    assert_eq!(page.bookings[0].unit_name, "A-101");
    assert_eq!(page.bookings[0].project_name, "Booking Fixture");

    // Search narrows by customer fields.
    let page = BookingRepo::list_for_owner(
        &pool,
        fx.owner_id,
        &BookingListQuery {
            search: Some("asha".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(page.total, 1);

    let page = BookingRepo::list_for_owner(
        &pool,
        fx.owner_id,
        &BookingListQuery {
            search: Some("nomatch".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(page.total, 0);

    let counts = BookingRepo::counts_for_owner(&pool, fx.owner_id).await.unwrap();
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.confirmed, 0);
    assert_eq!(counts.cancelled, 0);
}

#[sqlx::test]
async fn test_active_booking_index_backstop(pool: PgPool) {
    let fx = seed(&pool).await;
    BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();

    // A direct insert that bypasses the repository guard still trips the
    // partial unique index on active bookings.
    let result = sqlx::query(
        "INSERT INTO bookings (project_id, unit_id, email, first_name, last_name, mobile, status)
         VALUES ($1, $2, 'x@example.com', 'X', 'Y', '1112223334', 'pending')",
    )
    .bind(fx.project_id)
    .bind(fx.unit_id)
    .execute(&pool)
    .await;
    assert!(result.is_err());
}

#[sqlx::test]
async fn test_project_delete_removes_bookings(pool: PgPool) {
    let fx = seed(&pool).await;
    let booking = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();

    let deleted = ProjectRepo::hard_delete(&pool, fx.project_id).await.unwrap();
    assert!(deleted);

    // The cascade takes the whole hierarchy and its bookings with it.
    assert!(UnitRepo::find_by_id(&pool, fx.unit_id).await.unwrap().is_none());
    assert!(BookingRepo::find_by_id(&pool, booking.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn test_unit_delete_removes_bookings(pool: PgPool) {
    let fx = seed(&pool).await;
    let booking = BookingRepo::create_pending(&pool, &new_booking(fx.unit_id))
        .await
        .unwrap();

    let deleted = UnitRepo::hard_delete(&pool, fx.unit_id).await.unwrap();
    assert!(deleted);

    assert!(BookingRepo::find_by_id(&pool, booking.id)
        .await
        .unwrap()
        .is_none());
}
