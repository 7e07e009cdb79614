//! The authoritative unit-state enumeration.
//!
//! The integer values match the seeded `unit_statuses` rows and the
//! `units.state` column. Every call site goes through this enum; handlers
//! must not hard-code raw state integers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sale/occupancy state of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitState {
    /// Unit is available for sale or rent.
    Available = 1,
    /// Unit has a confirmed booking.
    Booked = 2,
    /// Unit is temporarily held.
    Hold = 3,
    /// Unit is reserved but not yet sold/rented.
    Blocked = 4,
}

impl UnitState {
    /// The `units.state` / `unit_statuses.id` column value.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Parse a raw state code, rejecting anything outside the known set.
    pub fn from_code(code: i32) -> Result<Self, CoreError> {
        match code {
            1 => Ok(UnitState::Available),
            2 => Ok(UnitState::Booked),
            3 => Ok(UnitState::Hold),
            4 => Ok(UnitState::Blocked),
            other => Err(CoreError::Validation(format!(
                "Unknown unit state code: {other}. Must be 1 (available), 2 (booked), 3 (hold), or 4 (blocked)"
            ))),
        }
    }

    /// Lowercase status name as exposed in listings.
    pub fn name(self) -> &'static str {
        match self {
            UnitState::Available => "available",
            UnitState::Booked => "booked",
            UnitState::Hold => "hold",
            UnitState::Blocked => "blocked",
        }
    }
}
