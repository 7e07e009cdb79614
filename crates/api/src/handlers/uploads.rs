//! Multipart media upload handler.
//!
//! `POST /uploads/{entity}` accepts one `file` part plus an optional
//! `replace_url` text part naming the asset the upload supersedes. The new
//! object is uploaded first; deleting the old one is best-effort.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use estate_core::error::CoreError;
use estate_storage::UploadKind;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response payload for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/v1/uploads/{entity}
pub async fn upload(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(entity): Path<String>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let storage = state.storage.as_ref().ok_or_else(|| {
        AppError::InternalError("Object storage is not configured".into())
    })?;

    let kind = UploadKind::parse(&entity).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown upload target: {entity}"
        )))
    })?;

    let mut file: Option<(String, Vec<u8>)> = None;
    let mut replace_url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Core(CoreError::Validation(
                            "File part must carry a filename".into(),
                        ))
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file part: {e}")))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("replace_url") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read field: {e}")))?;
                if !value.is_empty() {
                    replace_url = Some(value);
                }
            }
            _ => {}
        }
    }

    let (filename, bytes) = file.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Missing file part".into()))
    })?;

    let url = storage
        .replace(kind, &filename, bytes, replace_url.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(UploadResponse { url })))
}
