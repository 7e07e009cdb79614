//! Integration tests for the remaining entity repositories: bootstrap,
//! uniqueness, partial updates, and soft deletes.

use sqlx::PgPool;

use estate_db::models::amenity::{CreateAmenity, UpdateAmenity};
use estate_db::models::project::{CreateProject, UpdateProject};
use estate_db::models::project_update::CreateProjectUpdate;
use estate_db::repositories::{
    AmenityRepo, ProjectRepo, ProjectUpdateRepo, UnitStatusRepo, UserRepo,
};

async fn seed_owner(pool: &PgPool) -> i64 {
    UserRepo::create(
        pool,
        "owner@example.com",
        "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$hash",
        "Owner",
        None,
        None,
        "admin",
    )
    .await
    .unwrap()
    .id
}

fn new_project(user_id: i64, name: &str) -> CreateProject {
    CreateProject {
        user_id,
        name: name.to_string(),
        description: None,
        project_url: None,
        registration_number: None,
        logo: None,
        qr_code: None,
    }
}

#[sqlx::test]
async fn test_bootstrap_seeds_unit_statuses(pool: PgPool) {
    estate_db::health_check(&pool).await.unwrap();

    let statuses = UnitStatusRepo::list_active(&pool).await.unwrap();
    assert_eq!(statuses.len(), 4);
    assert_eq!(statuses[0].id, 1);
    assert_eq!(statuses[0].name, "Available");
    assert_eq!(statuses[1].name, "Booked");
    assert_eq!(statuses[2].name, "Hold");
    assert_eq!(statuses[3].name, "Blocked");
}

#[sqlx::test]
async fn test_duplicate_email_rejected(pool: PgPool) {
    seed_owner(&pool).await;
    let duplicate = UserRepo::create(
        &pool,
        "owner@example.com",
        "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$hash",
        "Other",
        None,
        None,
        "customer",
    )
    .await;
    assert!(duplicate.is_err());
}

#[sqlx::test]
async fn test_duplicate_project_slug_rejected(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    ProjectRepo::create(&pool, &new_project(owner, "Green Valley"))
        .await
        .unwrap();
    // Different display name, same slug after whitespace stripping.
    let duplicate = ProjectRepo::create(&pool, &new_project(owner, "Green  Valley")).await;
    assert!(duplicate.is_err());
}

#[sqlx::test]
async fn test_project_partial_update(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    let project = ProjectRepo::create(&pool, &new_project(owner, "Partial"))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            description: Some("Lakeside living".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Only the provided field changes.
    assert_eq!(updated.description.as_deref(), Some("Lakeside living"));
    assert_eq!(updated.name, "Partial");
    assert_eq!(updated.slug, "Partial");
}

#[sqlx::test]
async fn test_amenity_soft_delete(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    let project = ProjectRepo::create(&pool, &new_project(owner, "Amenities"))
        .await
        .unwrap();

    let amenity = AmenityRepo::create(
        &pool,
        &CreateAmenity {
            project_id: project.id,
            name: "Clubhouse".to_string(),
            image_url: None,
            vr_url: None,
        },
    )
    .await
    .unwrap();
    assert!(amenity.active);

    let renamed = AmenityRepo::update(
        &pool,
        amenity.id,
        &UpdateAmenity {
            name: Some("Clubhouse & Gym".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "Clubhouse & Gym");

    assert!(AmenityRepo::soft_delete(&pool, amenity.id).await.unwrap());

    // The row survives but drops out of active listings.
    let listed = AmenityRepo::list_active_by_project(&pool, project.id)
        .await
        .unwrap();
    assert!(listed.is_empty());
    assert!(AmenityRepo::find_by_id(&pool, amenity.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test]
async fn test_project_update_defaults_and_soft_delete(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    let project = ProjectRepo::create(&pool, &new_project(owner, "Updates"))
        .await
        .unwrap();

    let update = ProjectUpdateRepo::create(
        &pool,
        &CreateProjectUpdate {
            project_id: project.id,
            name: "Foundation complete".to_string(),
            image_url: None,
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(update.status, "planned");

    assert!(ProjectUpdateRepo::soft_delete(&pool, update.id).await.unwrap());
    let listed = ProjectUpdateRepo::list_active_by_project(&pool, project.id)
        .await
        .unwrap();
    assert!(listed.is_empty());
}
