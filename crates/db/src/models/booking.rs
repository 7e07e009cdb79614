//! Booking entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use estate_core::types::{DbId, Timestamp};

/// A booking row from the `bookings` table. `status` holds a
/// `estate_core::booking::BookingStatus` text value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub project_id: DbId,
    pub unit_id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub status: String,
    pub lead_grade: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated customer input for booking creation. Field checks (email
/// format, 10-digit mobile, presence) run before the repository is touched.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub unit_id: DbId,
}

/// Query parameters for the console bookings list.
#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    /// Filter by status (`pending`, `confirmed`, `cancelled`).
    pub status: Option<String>,
    /// Case-insensitive substring match on name, email, or mobile.
    pub search: Option<String>,
    /// 1-based page number. Defaults to 1.
    pub page: Option<i64>,
    /// Page size. Defaults to 10, capped at 100.
    pub limit: Option<i64>,
}

/// Booking joined with project and unit names for console listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingListItem {
    pub id: DbId,
    pub project_id: DbId,
    pub project_name: String,
    pub unit_id: DbId,
    pub unit_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub status: String,
    pub lead_grade: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Paged result for the bookings list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct BookingPage {
    pub bookings: Vec<BookingListItem>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Per-status booking counts used by the dashboard.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct BookingCounts {
    pub pending: i64,
    pub confirmed: i64,
    pub cancelled: i64,
}
