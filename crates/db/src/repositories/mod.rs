//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-step writes (tower
//! creation, plan assignment, booking creation/transition) run inside a
//! single transaction.

pub mod amenity_repo;
pub mod booking_repo;
pub mod building_repo;
pub mod floor_plan_repo;
pub mod floor_repo;
pub mod inventory_repo;
pub mod project_repo;
pub mod project_update_repo;
pub mod tower_plan_repo;
pub mod tower_repo;
pub mod unit_plan_repo;
pub mod unit_repo;
pub mod unit_status_repo;
pub mod user_repo;

pub use amenity_repo::AmenityRepo;
pub use booking_repo::BookingRepo;
pub use building_repo::BuildingRepo;
pub use floor_plan_repo::FloorPlanRepo;
pub use floor_repo::FloorRepo;
pub use inventory_repo::InventoryRepo;
pub use project_repo::ProjectRepo;
pub use project_update_repo::ProjectUpdateRepo;
pub use tower_plan_repo::TowerPlanRepo;
pub use tower_repo::TowerRepo;
pub use unit_plan_repo::UnitPlanRepo;
pub use unit_repo::UnitRepo;
pub use unit_status_repo::UnitStatusRepo;
pub use user_repo::UserRepo;
