//! Repository for the `units` table.

use sqlx::PgPool;

use estate_core::types::DbId;
use estate_core::unit_state::UnitState;

use crate::models::unit::{CreateUnit, Unit, UnitDetail, UpdateUnit};

const COLUMNS: &str =
    "id, floor_id, unit_plan_id, name, slug, cost, state, created_at, updated_at";

pub struct UnitRepo;

impl UnitRepo {
    pub async fn create(pool: &PgPool, input: &CreateUnit) -> Result<Unit, sqlx::Error> {
        let query = format!(
            "INSERT INTO units (floor_id, name, slug, cost, state)
             VALUES ($1, $2, $3, $4, COALESCE($5, {available}))
             RETURNING {COLUMNS}",
            available = UnitState::Available.code()
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(input.floor_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.cost)
            .bind(input.state)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE id = $1");
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact-name lookup scoped to one floor, the last step of hierarchy
    /// resolution.
    pub async fn find_by_floor_and_name(
        pool: &PgPool,
        floor_id: DbId,
        name: &str,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE floor_id = $1 AND name = $2");
        sqlx::query_as::<_, Unit>(&query)
            .bind(floor_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_floor(pool: &PgPool, floor_id: DbId) -> Result<Vec<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE floor_id = $1 ORDER BY id");
        sqlx::query_as::<_, Unit>(&query)
            .bind(floor_id)
            .fetch_all(pool)
            .await
    }

    /// Unit joined with its status row and mapped plan for detail views.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<UnitDetail>, sqlx::Error> {
        sqlx::query_as::<_, UnitDetail>(
            "SELECT u.id, u.floor_id, u.name, u.slug, u.cost, u.state,
                    s.name AS status_name, s.color AS status_color,
                    p.type_label AS plan_type, p.area AS plan_area,
                    p.cost AS plan_cost, p.vr_url AS plan_vr_url,
                    u.created_at, u.updated_at
             FROM units u
             LEFT JOIN unit_statuses s ON s.id = u.state
             LEFT JOIN unit_plans p ON p.id = u.unit_plan_id
             WHERE u.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnit,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!(
            "UPDATE units SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                cost = COALESCE($4, cost),
                state = COALESCE($5, state),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.cost)
            .bind(input.state)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_state(
        pool: &PgPool,
        id: DbId,
        state: UnitState,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!(
            "UPDATE units SET state = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(state.code())
            .fetch_optional(pool)
            .await
    }

    /// Map a unit plan onto a unit. The plan's base cost is copied onto the
    /// unit unless the unit already carries a per-unit override.
    pub async fn map_plan(
        pool: &PgPool,
        id: DbId,
        unit_plan_id: DbId,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!(
            "UPDATE units SET
                unit_plan_id = $2,
                cost = COALESCE(cost, (SELECT cost FROM unit_plans WHERE id = $2)),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(unit_plan_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
