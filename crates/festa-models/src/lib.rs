//! Shared data models for the festa backend.
//!
//! This crate provides:
//! - Media classification (image vs video) and the upload allow-list
//! - Object key generation for uploaded files
//! - Upload metadata attached to stored objects
//! - Small formatting utilities

pub mod key;
pub mod media;
pub mod metadata;
pub mod utils;

// Re-export common types
pub use key::{object_key, short_hash};
pub use media::{content_type_for, is_allowed_upload, MediaKind};
pub use metadata::UploadMetadata;
pub use utils::format_bytes;
