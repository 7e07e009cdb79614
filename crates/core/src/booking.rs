//! Booking state machine and lead grading.
//!
//! A booking starts as `Pending` and may move to `Confirmed` or `Cancelled`.
//! Transitions are source-guarded: a cancelled booking is terminal and a
//! confirmed booking can only be cancelled. The unit-state synchronization
//! rule lives here so every handler applies the same mapping.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::unit_state::UnitState;

/// Lifecycle status of a booking.
///
/// Stored as text in `bookings.status`; the db layer maps through
/// [`BookingStatus::as_str`] and [`BookingStatus::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Column value stored in `bookings.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a stored or requested status value.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Invalid booking status: {other}"
            ))),
        }
    }

    /// Whether a booking in this status blocks further bookings on its unit.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Validate a requested transition against the legal set.
    ///
    /// Legal: pending -> confirmed, pending -> cancelled,
    /// confirmed -> cancelled. Everything else is rejected, including
    /// self-transitions and any move out of `Cancelled`.
    pub fn validate_transition(self, target: BookingStatus) -> Result<(), CoreError> {
        let legal = matches!(
            (self, target),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        );
        if legal {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Illegal booking transition: {} -> {}",
                self.as_str(),
                target.as_str()
            )))
        }
    }

    /// The unit state a booking in this status implies.
    ///
    /// Creation deliberately leaves the unit Available; only a confirmed
    /// booking reserves it.
    pub fn unit_state(self) -> UnitState {
        match self {
            BookingStatus::Pending => UnitState::Available,
            BookingStatus::Confirmed => UnitState::Booked,
            BookingStatus::Cancelled => UnitState::Available,
        }
    }
}

/// Sales-lead quality classification assigned by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadGrade {
    Hot,
    Warm,
    Cold,
}

impl LeadGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadGrade::Hot => "hot",
            LeadGrade::Warm => "warm",
            LeadGrade::Cold => "cold",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "hot" => Ok(LeadGrade::Hot),
            "warm" => Ok(LeadGrade::Warm),
            "cold" => Ok(LeadGrade::Cold),
            other => Err(CoreError::Validation(format!("Invalid lead grade: {other}"))),
        }
    }
}
