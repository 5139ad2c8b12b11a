//! Metadata attached to uploaded objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lightweight metadata stored with each uploaded object.
///
/// Persisted as native object metadata on the store; informational only,
/// nothing reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadMetadata {
    /// Upload timestamp (RFC 3339)
    pub uploaded_at: DateTime<Utc>,
    /// Name of the file as the guest selected it
    pub original_name: String,
    /// Optional display name of the uploading guest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
}

impl UploadMetadata {
    pub fn new(original_name: impl Into<String>, uploader: Option<String>) -> Self {
        Self {
            uploaded_at: Utc::now(),
            original_name: original_name.into(),
            uploader: uploader.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Flatten into (key, value) pairs for the store's metadata map.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("uploaded-at", self.uploaded_at.to_rfc3339()),
            ("original-name", self.original_name.clone()),
        ];
        if let Some(uploader) = &self.uploader {
            pairs.push(("uploader", uploader.clone()));
        }
        pairs
    }
}
