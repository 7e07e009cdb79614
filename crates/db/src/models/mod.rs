//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod amenity;
pub mod booking;
pub mod building;
pub mod floor;
pub mod floor_plan;
pub mod inventory;
pub mod project;
pub mod project_update;
pub mod tower;
pub mod tower_plan;
pub mod unit;
pub mod unit_plan;
pub mod unit_status;
pub mod user;
