//! Repository for the `unit_plans` table and its balcony images.

use sqlx::PgPool;

use estate_core::types::DbId;

use crate::models::unit_plan::{
    BalconyImage, CreateBalconyImage, CreateUnitPlan, UnitPlan, UpdateUnitPlan,
};

const COLUMNS: &str = "id, project_id, name, type_label, area, cost, image_url, svg_url, \
                       vr_url, active, created_at, updated_at";

const BALCONY_COLUMNS: &str = "id, unit_plan_id, name, image_url, vr_url, created_at, updated_at";

pub struct UnitPlanRepo;

impl UnitPlanRepo {
    pub async fn create(pool: &PgPool, input: &CreateUnitPlan) -> Result<UnitPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO unit_plans
                 (project_id, name, type_label, area, cost, image_url, svg_url, vr_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnitPlan>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.type_label)
            .bind(input.area)
            .bind(input.cost)
            .bind(&input.image_url)
            .bind(&input.svg_url)
            .bind(&input.vr_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UnitPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unit_plans WHERE id = $1");
        sqlx::query_as::<_, UnitPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<UnitPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM unit_plans
             WHERE project_id = $1 AND active
             ORDER BY id"
        );
        sqlx::query_as::<_, UnitPlan>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnitPlan,
    ) -> Result<Option<UnitPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE unit_plans SET
                name = COALESCE($2, name),
                type_label = COALESCE($3, type_label),
                area = COALESCE($4, area),
                cost = COALESCE($5, cost),
                image_url = COALESCE($6, image_url),
                svg_url = COALESCE($7, svg_url),
                vr_url = COALESCE($8, vr_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnitPlan>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.type_label)
            .bind(input.area)
            .bind(input.cost)
            .bind(&input.image_url)
            .bind(&input.svg_url)
            .bind(&input.vr_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft delete. Units keep their mapping; listings stop offering the plan.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE unit_plans SET active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn add_balcony_image(
        pool: &PgPool,
        unit_plan_id: DbId,
        input: &CreateBalconyImage,
    ) -> Result<BalconyImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO balcony_images (unit_plan_id, name, image_url, vr_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {BALCONY_COLUMNS}"
        );
        sqlx::query_as::<_, BalconyImage>(&query)
            .bind(unit_plan_id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.vr_url)
            .fetch_one(pool)
            .await
    }

    pub async fn list_balcony_images(
        pool: &PgPool,
        unit_plan_id: DbId,
    ) -> Result<Vec<BalconyImage>, sqlx::Error> {
        let query = format!(
            "SELECT {BALCONY_COLUMNS} FROM balcony_images
             WHERE unit_plan_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, BalconyImage>(&query)
            .bind(unit_plan_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete_balcony_image(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM balcony_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
