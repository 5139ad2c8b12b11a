//! Bulk export handlers.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use festa_storage::StorageError;

use crate::auth::AccessSession;
use crate::error::ApiError;
use crate::state::AppState;

/// Bulk export request: the caller's explicit selection of stored names.
#[derive(Deserialize)]
pub struct ArchiveRequest {
    pub names: Vec<String>,
}

/// Build a zip archive from the selected objects.
///
/// All-or-nothing: any failed download aborts the operation and no partial
/// archive is offered, unlike the per-file tolerance of the upload flow.
pub async fn build_archive(
    State(state): State<AppState>,
    _session: AccessSession,
    Json(request): Json<ArchiveRequest>,
) -> Result<Response, ApiError> {
    if request.names.is_empty() {
        return Err(ApiError::bad_request("Selection is empty"));
    }

    for name in &request.names {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(ApiError::bad_request(format!("Invalid object name: {}", name)));
        }
    }

    info!("Building archive for {} objects", request.names.len());

    let bytes = state
        .storage
        .archive_objects(&request.names)
        .await
        .map_err(|e| match e {
            StorageError::NotFound(key) => ApiError::not_found(format!("Object not found: {}", key)),
            other => ApiError::Storage(other),
        })?;

    let filename = format!("event_photos_{}.zip", Utc::now().format("%Y%m%d_%H%M%S"));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/zip")
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(bytes))
        .map_err(|e| ApiError::internal(format!("Failed to build response: {}", e)))
}
