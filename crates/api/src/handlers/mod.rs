//! HTTP request handlers, grouped by resource.

pub mod amenity;
pub mod auth;
pub mod booking;
pub mod building;
pub mod dashboard;
pub mod floor;
pub mod floor_plan;
pub mod project;
pub mod project_update;
pub mod storefront;
pub mod tower;
pub mod unit;
pub mod unit_plan;
pub mod uploads;
