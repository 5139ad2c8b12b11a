//! Media classification by file extension.

use serde::{Deserialize, Serialize};

/// Extensions rendered as video in the gallery. Everything else is an image.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "mpg", "mpeg"];

/// Extensions accepted by the upload flow.
const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "heic", "heif", "mp4", "mov", "avi", "mkv", "mpg", "mpeg",
];

/// How a stored object is rendered in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a filename by its extension (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match extension(name) {
            Some(ext) if VIDEO_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Check whether a filename carries an extension the upload flow accepts.
pub fn is_allowed_upload(name: &str) -> bool {
    match extension(name) {
        Some(ext) => ALLOWED_UPLOAD_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Guess a content type from the file extension.
///
/// Used when the upload request does not carry one for the part.
pub fn content_type_for(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("mpg") | Some("mpeg") => "video/mpeg",
        _ => "application/octet-stream",
    }
}

/// Lowercased extension of a filename, if it has one.
fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
