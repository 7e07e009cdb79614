//! Public, unauthenticated storefront handlers.
//!
//! Every route hangs off a project slug and resolves the hierarchy level by
//! level. The first level that does not resolve fails the request with a
//! name-bearing 404; later levels are never attempted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use estate_core::error::CoreError;
use estate_core::stats::{aggregate, UnitStats};
use estate_core::validate::{require_non_empty, validate_email, validate_mobile};
use estate_db::models::amenity::Amenity;
use estate_db::models::booking::{Booking, CreateBooking};
use estate_db::models::building::Building;
use estate_db::models::floor::Floor;
use estate_db::models::floor_plan::FloorPlan;
use estate_db::models::inventory::InventoryRecord;
use estate_db::models::project::Project;
use estate_db::models::project_update::ProjectUpdate;
use estate_db::models::tower::Tower;
use estate_db::models::tower_plan::TowerPlan;
use estate_db::models::unit::Unit;
use estate_db::repositories::{
    AmenityRepo, BookingRepo, BuildingRepo, FloorPlanRepo, FloorRepo, InventoryRepo,
    ProjectRepo, ProjectUpdateRepo, TowerPlanRepo, TowerRepo, UnitRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Project with its public marketing content.
#[derive(Debug, Serialize)]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub amenities: Vec<Amenity>,
    pub updates: Vec<ProjectUpdate>,
}

/// Tower with its selection-view plans, floors, and flat unit summary.
#[derive(Debug, Serialize)]
pub struct TowerView {
    #[serde(flatten)]
    pub tower: Tower,
    pub plans: Vec<TowerPlan>,
    pub floors: Vec<Floor>,
    pub units: Vec<InventoryRecord>,
}

/// Tower with occupancy/type statistics.
#[derive(Debug, Serialize)]
pub struct TowerStats {
    #[serde(flatten)]
    pub tower: Tower,
    pub stats: UnitStats,
}

/// Floor with its plan and units.
#[derive(Debug, Serialize)]
pub struct FloorView {
    #[serde(flatten)]
    pub floor: Floor,
    pub plan: Option<FloorPlan>,
    pub units: Vec<Unit>,
}

/// Floor with occupancy/type statistics.
#[derive(Debug, Serialize)]
pub struct FloorStats {
    #[serde(flatten)]
    pub floor: Floor,
    pub stats: UnitStats,
}

/// Query parameters for the inventory filter.
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub tower: String,
    pub floor: Option<String>,
}

// ---------------------------------------------------------------------------
// Hierarchy resolution
// ---------------------------------------------------------------------------

/// Resolve an active project by slug.
async fn resolve_project(state: &AppState, slug: &str) -> AppResult<Project> {
    let project = ProjectRepo::find_by_slug(&state.pool, slug)
        .await?
        .filter(|p| p.active)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundNamed {
                entity: "Project",
                name: slug.to_string(),
            })
        })?;
    Ok(project)
}

/// The project's most recently created building. Re-uploading a building
/// supersedes older rows without deleting them.
async fn resolve_building(state: &AppState, project: &Project) -> AppResult<Building> {
    BuildingRepo::latest_for_project(&state.pool, project.id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundNamed {
                entity: "Building",
                name: project.slug.clone(),
            })
        })
}

async fn resolve_tower(state: &AppState, project: &Project, tower_name: &str) -> AppResult<Tower> {
    let building = resolve_building(state, project).await?;
    TowerRepo::find_by_building_and_name(&state.pool, building.id, tower_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundNamed {
                entity: "Tower",
                name: tower_name.to_string(),
            })
        })
}

async fn resolve_floor(state: &AppState, tower: &Tower, number: i32) -> AppResult<Floor> {
    let name = Floor::name_for_number(number);
    FloorRepo::find_by_tower_and_name(&state.pool, tower.id, &name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundNamed {
                entity: "Floor",
                name,
            })
        })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/storefront/projects/{slug}
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Project>> {
    let project = resolve_project(&state, &slug).await?;
    Ok(Json(project))
}

/// GET /api/v1/storefront/projects/{slug}/details
pub async fn get_project_details(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProjectDetails>> {
    let project = resolve_project(&state, &slug).await?;
    let amenities = AmenityRepo::list_active_by_project(&state.pool, project.id).await?;
    let updates = ProjectUpdateRepo::list_active_by_project(&state.pool, project.id).await?;
    Ok(Json(ProjectDetails {
        project,
        amenities,
        updates,
    }))
}

/// GET /api/v1/storefront/projects/{slug}/building
pub async fn get_building(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Building>> {
    let project = resolve_project(&state, &slug).await?;
    let building = resolve_building(&state, &project).await?;
    Ok(Json(building))
}

/// GET /api/v1/storefront/projects/{slug}/towers/{tower}
pub async fn get_tower(
    State(state): State<AppState>,
    Path((slug, tower_name)): Path<(String, String)>,
) -> AppResult<Json<TowerView>> {
    let project = resolve_project(&state, &slug).await?;
    let tower = resolve_tower(&state, &project, &tower_name).await?;
    let plans = TowerPlanRepo::list_by_tower_deduped(&state.pool, tower.id).await?;
    let floors = FloorRepo::list_by_tower(&state.pool, tower.id).await?;
    let units = InventoryRepo::filter(&state.pool, project.id, &tower.name, None).await?;
    Ok(Json(TowerView {
        tower,
        plans,
        floors,
        units,
    }))
}

/// GET /api/v1/storefront/projects/{slug}/towers/{tower}/stats
pub async fn get_tower_stats(
    State(state): State<AppState>,
    Path((slug, tower_name)): Path<(String, String)>,
) -> AppResult<Json<TowerStats>> {
    let project = resolve_project(&state, &slug).await?;
    let tower = resolve_tower(&state, &project, &tower_name).await?;
    let snapshots = InventoryRepo::unit_snapshots_by_tower(&state.pool, tower.id).await?;
    let stats = aggregate(&snapshots);
    Ok(Json(TowerStats { tower, stats }))
}

/// GET /api/v1/storefront/projects/{slug}/towers/{tower}/floors/{n}
pub async fn get_floor(
    State(state): State<AppState>,
    Path((slug, tower_name, number)): Path<(String, String, i32)>,
) -> AppResult<Json<FloorView>> {
    let project = resolve_project(&state, &slug).await?;
    let tower = resolve_tower(&state, &project, &tower_name).await?;
    let floor = resolve_floor(&state, &tower, number).await?;
    let plan = match floor.floor_plan_id {
        Some(plan_id) => FloorPlanRepo::find_by_id(&state.pool, plan_id).await?,
        None => None,
    };
    let units = UnitRepo::list_by_floor(&state.pool, floor.id).await?;
    Ok(Json(FloorView { floor, plan, units }))
}

/// GET /api/v1/storefront/projects/{slug}/towers/{tower}/floors/{n}/stats
pub async fn get_floor_stats(
    State(state): State<AppState>,
    Path((slug, tower_name, number)): Path<(String, String, i32)>,
) -> AppResult<Json<FloorStats>> {
    let project = resolve_project(&state, &slug).await?;
    let tower = resolve_tower(&state, &project, &tower_name).await?;
    let floor = resolve_floor(&state, &tower, number).await?;
    let snapshots = InventoryRepo::unit_snapshots_by_floor(&state.pool, floor.id).await?;
    let stats = aggregate(&snapshots);
    Ok(Json(FloorStats { floor, stats }))
}

/// GET /api/v1/storefront/projects/{slug}/towers/{tower}/floors/{n}/units/{unit}
///
/// Full-path unit lookup. Responds with the flat inventory record (PascalCase
/// keys) for the named unit.
pub async fn get_unit(
    State(state): State<AppState>,
    Path((slug, tower_name, number, unit_name)): Path<(String, String, i32, String)>,
) -> AppResult<Json<InventoryRecord>> {
    let project = resolve_project(&state, &slug).await?;
    let tower = resolve_tower(&state, &project, &tower_name).await?;
    let floor = resolve_floor(&state, &tower, number).await?;

    UnitRepo::find_by_floor_and_name(&state.pool, floor.id, &unit_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundNamed {
                entity: "Unit",
                name: unit_name.clone(),
            })
        })?;

    let records =
        InventoryRepo::filter(&state.pool, project.id, &tower.name, Some(floor.number())).await?;
    let record = records
        .into_iter()
        .find(|r| r.flat_number == unit_name)
        .ok_or(AppError::Core(CoreError::NotFoundNamed {
            entity: "Unit",
            name: unit_name,
        }))?;
    Ok(Json(record))
}

/// GET /api/v1/storefront/projects/{slug}/amenities
pub async fn list_amenities(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<Amenity>>> {
    let project = resolve_project(&state, &slug).await?;
    let amenities = AmenityRepo::list_active_by_project(&state.pool, project.id).await?;
    Ok(Json(amenities))
}

/// GET /api/v1/storefront/projects/{slug}/updates
pub async fn list_updates(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<ProjectUpdate>>> {
    let project = resolve_project(&state, &slug).await?;
    let updates = ProjectUpdateRepo::list_active_by_project(&state.pool, project.id).await?;
    Ok(Json(updates))
}

/// GET /api/v1/storefront/projects/{slug}/units?tower=..&floor=..
///
/// Flat inventory filter. Tower name is required; the floor number is
/// optional and matches the canonical `Floor-<n>` name.
pub async fn filter_units(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<InventoryQuery>,
) -> AppResult<Json<Vec<InventoryRecord>>> {
    let project = resolve_project(&state, &slug).await?;
    let records = InventoryRepo::filter(
        &state.pool,
        project.id,
        &params.tower,
        params.floor.as_deref(),
    )
    .await?;
    Ok(Json(records))
}

/// POST /api/v1/storefront/projects/{slug}/bookings
///
/// Validated booking creation. The repository re-checks unit availability
/// under a row lock, so two concurrent requests for the same unit cannot
/// both succeed.
pub async fn create_booking(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    resolve_project(&state, &slug).await?;

    require_non_empty("first_name", &input.first_name)?;
    require_non_empty("last_name", &input.last_name)?;
    validate_email(&input.email)?;
    validate_mobile(&input.mobile)?;

    let booking = BookingRepo::create_pending(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
