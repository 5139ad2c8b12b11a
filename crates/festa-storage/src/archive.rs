//! Bundling selected objects into an in-memory zip archive.

use std::io::{Cursor, Write};

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::client::BucketClient;
use crate::error::{StorageError, StorageResult};

/// Write entries into a flat in-memory zip archive.
///
/// Entry names are used verbatim; duplicate names are written as given, the
/// later entry shadowing the earlier one for readers.
pub fn write_archive(entries: &[(String, Vec<u8>)]) -> StorageResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, bytes) in entries {
        writer
            .start_file(name.clone(), SimpleFileOptions::default())
            .map_err(|e| StorageError::Archive(format!("{}: {}", name, e)))?;
        writer.write_all(bytes)?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| StorageError::Archive(e.to_string()))?;
    Ok(cursor.into_inner())
}

impl BucketClient {
    /// Download the named objects and bundle them into one zip archive.
    ///
    /// All-or-nothing: the first failed download aborts the whole operation
    /// and no partial archive is returned.
    pub async fn archive_objects(&self, keys: &[String]) -> StorageResult<Vec<u8>> {
        let mut entries = Vec::with_capacity(keys.len());

        for key in keys {
            let bytes = self.download_bytes(key).await?;
            entries.push((key.clone(), bytes));
        }

        let archive = write_archive(&entries)?;
        info!(
            "Built archive with {} entries ({} bytes)",
            entries.len(),
            archive.len()
        );
        Ok(archive)
    }
}
