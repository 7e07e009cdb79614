//! Well-known user role names.
//!
//! These must match the `users.role` column values. `admin` is the back-office
//! operator role; `customer` is a company account managing its own projects.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CUSTOMER: &str = "customer";
