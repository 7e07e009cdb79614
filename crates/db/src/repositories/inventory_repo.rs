//! Denormalized inventory queries for the storefront.
//!
//! Both the filter endpoint and the occupancy statistics fetch the whole
//! unit subtree in one join instead of walking the hierarchy row by row.

use sqlx::PgPool;

use estate_core::stats::UnitSnapshot;
use estate_core::types::DbId;

use crate::models::inventory::InventoryRecord;

pub struct InventoryRepo;

impl InventoryRepo {
    /// Flat unit records for a tower of the project, optionally narrowed to
    /// one floor number. A single join covers tower, floor, plan, and
    /// status; the floor filter matches the canonical `Floor-<n>` name.
    pub async fn filter(
        pool: &PgPool,
        project_id: DbId,
        tower_name: &str,
        floor_number: Option<&str>,
    ) -> Result<Vec<InventoryRecord>, sqlx::Error> {
        sqlx::query_as::<_, InventoryRecord>(
            "SELECT u.id,
                    t.name AS tower_name,
                    REPLACE(f.name, 'Floor-', '') AS floor_number,
                    u.name AS flat_number,
                    COALESCE(u.cost, up.cost) AS total_cost,
                    up.area AS sbu,
                    LOWER(s.name) AS status,
                    up.type_label AS unit_type,
                    u.created_at, u.updated_at
             FROM units u
             JOIN floors f ON f.id = u.floor_id
             JOIN towers t ON t.id = f.tower_id
             JOIN buildings b ON b.id = t.building_id
             LEFT JOIN unit_plans up ON up.id = u.unit_plan_id
             LEFT JOIN unit_statuses s ON s.id = u.state
             WHERE b.project_id = $1
               AND t.name = $2
               AND ($3::text IS NULL OR f.name = 'Floor-' || $3)
             ORDER BY u.id",
        )
        .bind(project_id)
        .bind(tower_name)
        .bind(floor_number)
        .fetch_all(pool)
        .await
    }

    /// Status/plan snapshots for every unit in a tower, feeding the
    /// occupancy aggregator.
    pub async fn unit_snapshots_by_tower(
        pool: &PgPool,
        tower_id: DbId,
    ) -> Result<Vec<UnitSnapshot>, sqlx::Error> {
        let rows: Vec<(Option<String>, Option<String>, Option<i32>)> = sqlx::query_as(
            "SELECT s.name, up.type_label, up.area
             FROM units u
             JOIN floors f ON f.id = u.floor_id
             LEFT JOIN unit_plans up ON up.id = u.unit_plan_id
             LEFT JOIN unit_statuses s ON s.id = u.state
             WHERE f.tower_id = $1
             ORDER BY u.id",
        )
        .bind(tower_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(snapshot_from_row).collect())
    }

    /// Status/plan snapshots for every unit on a floor.
    pub async fn unit_snapshots_by_floor(
        pool: &PgPool,
        floor_id: DbId,
    ) -> Result<Vec<UnitSnapshot>, sqlx::Error> {
        let rows: Vec<(Option<String>, Option<String>, Option<i32>)> = sqlx::query_as(
            "SELECT s.name, up.type_label, up.area
             FROM units u
             LEFT JOIN unit_plans up ON up.id = u.unit_plan_id
             LEFT JOIN unit_statuses s ON s.id = u.state
             WHERE u.floor_id = $1
             ORDER BY u.id",
        )
        .bind(floor_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(snapshot_from_row).collect())
    }
}

fn snapshot_from_row(
    (status_name, plan_type, plan_area): (Option<String>, Option<String>, Option<i32>),
) -> UnitSnapshot {
    UnitSnapshot {
        status_name,
        plan_type,
        plan_area,
    }
}
