//! Repository for the `amenities` table.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};

const COLUMNS: &str = "id, project_id, name, image_url, vr_url, active, created_at, updated_at";

pub struct AmenityRepo;

impl AmenityRepo {
    pub async fn create(pool: &PgPool, input: &CreateAmenity) -> Result<Amenity, sqlx::Error> {
        let query = format!(
            "INSERT INTO amenities (project_id, name, image_url, vr_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.vr_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amenities WHERE id = $1");
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Amenity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM amenities
             WHERE project_id = $1 AND active
             ORDER BY id"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAmenity,
    ) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!(
            "UPDATE amenities SET
                name = COALESCE($2, name),
                image_url = COALESCE($3, image_url),
                vr_url = COALESCE($4, vr_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.vr_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE amenities SET active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
