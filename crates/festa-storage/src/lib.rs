//! Object storage client for the shared event bucket.
//!
//! This crate provides:
//! - Guarded (no-overwrite) byte uploads with object metadata
//! - Full bucket listing and byte downloads
//! - Public or presigned URL derivation per object
//! - Bundling selected objects into an in-memory zip archive

pub mod archive;
pub mod client;
pub mod error;

pub use archive::write_archive;
pub use client::{BucketClient, BucketConfig, ObjectInfo};
pub use error::{StorageError, StorageResult};
