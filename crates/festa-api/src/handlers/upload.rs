//! Upload flow handlers.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use festa_models::{content_type_for, is_allowed_upload, object_key, UploadMetadata};

use crate::auth::AccessSession;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Result of one file within an upload batch.
#[derive(Serialize)]
pub struct UploadOutcome {
    pub original_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate report for an upload batch.
#[derive(Serialize)]
pub struct UploadReport {
    pub succeeded: u32,
    pub total: u32,
    pub results: Vec<UploadOutcome>,
}

/// Upload a batch of files (multipart).
///
/// Files are processed sequentially in submission order. A failed file is
/// recorded and the batch continues; the report always covers every file.
pub async fn upload_files(
    State(state): State<AppState>,
    _session: AccessSession,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadReport>> {
    let mut uploader: Option<String> = None;
    let mut results: Vec<UploadOutcome> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart request: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string());
        match field_name.as_deref() {
            Some("uploader") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid uploader field: {}", e)))?;
                uploader = Some(text).filter(|s| !s.trim().is_empty());
            }
            Some("file") => {
                let original_name = match field.file_name() {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => {
                        results.push(UploadOutcome {
                            original_name: String::new(),
                            key: None,
                            error: Some("Missing filename".to_string()),
                        });
                        continue;
                    }
                };

                if let Err(reason) = validate_upload_name(&original_name) {
                    warn!("Rejected upload of {}: {}", original_name, reason);
                    results.push(UploadOutcome {
                        original_name,
                        key: None,
                        error: Some(reason),
                    });
                    continue;
                }

                let content_type = field
                    .content_type()
                    .map(|ct| ct.to_string())
                    .unwrap_or_else(|| content_type_for(&original_name).to_string());

                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!("Failed to read {}: {}", original_name, e);
                        results.push(UploadOutcome {
                            original_name,
                            key: None,
                            error: Some(format!("Failed to read file: {}", e)),
                        });
                        continue;
                    }
                };

                let key = object_key(&original_name, Utc::now());
                let metadata = UploadMetadata::new(original_name.clone(), uploader.clone());
                let pairs = metadata.to_pairs();

                match state
                    .storage
                    .upload_bytes(bytes.to_vec(), &key, &content_type, &pairs)
                    .await
                {
                    Ok(()) => {
                        info!("Uploaded {} as {}", original_name, key);
                        results.push(UploadOutcome {
                            original_name,
                            key: Some(key),
                            error: None,
                        });
                    }
                    Err(e) => {
                        warn!("Upload of {} failed: {}", original_name, e);
                        results.push(UploadOutcome {
                            original_name,
                            key: None,
                            error: Some(e.to_string()),
                        });
                    }
                }
            }
            _ => continue,
        }
    }

    if results.is_empty() {
        return Err(ApiError::bad_request("No files in upload request"));
    }

    let total = results.len() as u32;
    let succeeded = results.iter().filter(|r| r.key.is_some()).count() as u32;
    info!("Upload batch finished: {}/{} succeeded", succeeded, total);

    Ok(Json(UploadReport {
        succeeded,
        total,
        results,
    }))
}

/// Validate a client-supplied filename before deriving a key from it.
fn validate_upload_name(name: &str) -> Result<(), String> {
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err("Invalid filename".to_string());
    }
    if !is_allowed_upload(name) {
        return Err("Unsupported file type".to_string());
    }
    Ok(())
}
