//! Repository for the `bookings` table.
//!
//! Booking writes are the only place where availability rules and the
//! database meet, so both the creation check and the status/unit-state
//! sync run inside single transactions here.

use sqlx::PgPool;

use estate_core::booking::{BookingStatus, LeadGrade};
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_core::unit_state::UnitState;

use crate::error::DbError;
use crate::models::booking::{
    Booking, BookingCounts, BookingListItem, BookingListQuery, BookingPage, CreateBooking,
};

const COLUMNS: &str = "id, project_id, unit_id, email, first_name, last_name, mobile, \
                       status, lead_grade, created_at, updated_at";

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

pub struct BookingRepo;

impl BookingRepo {
    /// Create a pending booking for a unit, enforcing availability.
    ///
    /// The unit row is locked with `SELECT ... FOR UPDATE` for the duration
    /// of the transaction, so the availability check and the insert are
    /// atomic with respect to concurrent booking attempts. The partial
    /// unique index on active bookings backstops the check; a race that
    /// slips past the lock surfaces as a unique violation.
    ///
    /// The owning project is resolved from the unit's ancestry. Creation
    /// does not change the unit's state; only confirmation reserves it.
    pub async fn create_pending(pool: &PgPool, input: &CreateBooking) -> Result<Booking, DbError> {
        let mut tx = pool.begin().await?;

        let locked: Option<(i32,)> =
            sqlx::query_as("SELECT state FROM units WHERE id = $1 FOR UPDATE")
                .bind(input.unit_id)
                .fetch_optional(&mut *tx)
                .await?;
        let state = match locked {
            Some((state,)) => state,
            None => {
                return Err(CoreError::NotFound {
                    entity: "Unit",
                    id: input.unit_id,
                }
                .into())
            }
        };

        if state != UnitState::Available.code() {
            return Err(CoreError::Conflict("Unit is not available for booking".into()).into());
        }

        let has_active: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM bookings
                 WHERE unit_id = $1 AND status IN ('pending', 'confirmed')
             )",
        )
        .bind(input.unit_id)
        .fetch_one(&mut *tx)
        .await?;
        if has_active {
            return Err(
                CoreError::Conflict("Unit already has an active booking".into()).into(),
            );
        }

        let project_id: DbId = sqlx::query_scalar(
            "SELECT b.project_id
             FROM units u
             JOIN floors f ON f.id = u.floor_id
             JOIN towers t ON t.id = f.tower_id
             JOIN buildings b ON b.id = t.building_id
             WHERE u.id = $1",
        )
        .bind(input.unit_id)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO bookings (project_id, unit_id, email, first_name, last_name, mobile, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(project_id)
            .bind(input.unit_id)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.mobile)
            .bind(BookingStatus::Pending.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(booking)
    }

    /// Move a booking to `target` and synchronize the unit's state, in one
    /// transaction.
    ///
    /// The current status is read under a row lock and the transition is
    /// validated against the state machine before anything is written.
    pub async fn transition(
        pool: &PgPool,
        id: DbId,
        target: BookingStatus,
    ) -> Result<Booking, DbError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE");
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id,
            })?;

        let current = BookingStatus::parse(&booking.status)?;
        current.validate_transition(target)?;

        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(target.as_str())
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE units SET state = $2, updated_at = NOW() WHERE id = $1")
            .bind(booking.unit_id)
            .bind(target.unit_state().code())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_lead_grade(
        pool: &PgPool,
        id: DbId,
        grade: LeadGrade,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET lead_grade = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(grade.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Paged booking list scoped to one project owner, with optional status
    /// filter and free-text search over customer fields.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
        params: &BookingListQuery,
    ) -> Result<BookingPage, sqlx::Error> {
        let limit = params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let page = params.page.unwrap_or(1).max(1);
        let offset = (page - 1) * limit;

        // Build the WHERE clause and track the next bind parameter index.
        let mut conditions = vec!["p.user_id = $1".to_string()];
        let mut bind_idx: u32 = 2;

        if params.status.is_some() {
            conditions.push(format!("bk.status = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.search.is_some() {
            conditions.push(format!(
                "(bk.first_name ILIKE ${bind_idx} OR bk.last_name ILIKE ${bind_idx} \
                 OR bk.email ILIKE ${bind_idx} OR bk.mobile ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        let where_clause = conditions.join(" AND ");
        let pattern = params.search.as_deref().map(|s| format!("%{s}%"));

        let count_query = format!(
            "SELECT COUNT(*)
             FROM bookings bk
             JOIN projects p ON p.id = bk.project_id
             WHERE {where_clause}"
        );
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query).bind(owner_id);
        if let Some(status) = &params.status {
            count_q = count_q.bind(status);
        }
        if let Some(pattern) = &pattern {
            count_q = count_q.bind(pattern);
        }
        let total = count_q.fetch_one(pool).await?;

        let list_query = format!(
            "SELECT bk.id, bk.project_id, p.name AS project_name,
                    bk.unit_id, u.name AS unit_name,
                    bk.email, bk.first_name, bk.last_name, bk.mobile,
                    bk.status, bk.lead_grade, bk.created_at, bk.updated_at
             FROM bookings bk
             JOIN projects p ON p.id = bk.project_id
             JOIN units u ON u.id = bk.unit_id
             WHERE {where_clause}
             ORDER BY bk.created_at DESC, bk.id DESC
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );
        let mut list_q = sqlx::query_as::<_, BookingListItem>(&list_query).bind(owner_id);
        if let Some(status) = &params.status {
            list_q = list_q.bind(status);
        }
        if let Some(pattern) = &pattern {
            list_q = list_q.bind(pattern);
        }
        let bookings = list_q.bind(limit).bind(offset).fetch_all(pool).await?;

        Ok(BookingPage {
            bookings,
            total,
            page,
            limit,
        })
    }

    /// Per-status counts across the owner's projects, for the dashboard.
    pub async fn counts_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<BookingCounts, sqlx::Error> {
        sqlx::query_as::<_, BookingCounts>(
            "SELECT COUNT(*) FILTER (WHERE bk.status = 'pending') AS pending,
                    COUNT(*) FILTER (WHERE bk.status = 'confirmed') AS confirmed,
                    COUNT(*) FILTER (WHERE bk.status = 'cancelled') AS cancelled
             FROM bookings bk
             JOIN projects p ON p.id = bk.project_id
             WHERE p.user_id = $1",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await
    }
}
