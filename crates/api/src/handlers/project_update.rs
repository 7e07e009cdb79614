//! Handlers for the `/updates` resource (construction-progress updates).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::project_update::{CreateProjectUpdate, ProjectUpdate, UpdateProjectUpdate};
use estate_db::repositories::ProjectUpdateRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const UPDATE_STATUSES: [&str; 3] = ["planned", "in_progress", "completed"];

fn validate_status(status: Option<&str>) -> Result<(), AppError> {
    if let Some(s) = status {
        if !UPDATE_STATUSES.contains(&s) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid update status: {s}. Must be planned, in_progress, or completed"
            ))));
        }
    }
    Ok(())
}

/// POST /api/v1/updates
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateProjectUpdate>,
) -> AppResult<(StatusCode, Json<ProjectUpdate>)> {
    owned_project(&state, &auth_user, input.project_id).await?;
    validate_status(input.status.as_deref())?;
    let update = ProjectUpdateRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(update)))
}

/// PUT /api/v1/updates/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectUpdate>,
) -> AppResult<Json<ProjectUpdate>> {
    let existing = ProjectUpdateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectUpdate",
            id,
        }))?;
    owned_project(&state, &auth_user, existing.project_id).await?;
    validate_status(input.status.as_deref())?;
    let updated = ProjectUpdateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectUpdate",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/updates/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ProjectUpdateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectUpdate",
            id,
        }))?;
    owned_project(&state, &auth_user, existing.project_id).await?;
    ProjectUpdateRepo::soft_delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
