//! Domain logic for the estate inventory platform.
//!
//! Pure types and functions shared by the persistence and HTTP layers:
//! the unit-state enumeration, the booking state machine, occupancy
//! aggregation, field validation, and the error taxonomy. No I/O here.

pub mod booking;
pub mod error;
pub mod roles;
pub mod slug;
pub mod stats;
pub mod types;
pub mod unit_state;
pub mod validate;
