//! Object key generation for uploaded files.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// First 8 hex characters of a SHA-256 over the filename.
///
/// Content-insensitive: only the name is hashed, never the file bytes.
pub fn short_hash(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    digest.iter().take(4).map(|b| format!("{:02x}", b)).collect()
}

/// Derive a bucket key for an uploaded file.
///
/// Format: `{YYYYMMDD_HHMMSS}_{hash8}_{original_name}`. Deterministic for a
/// given (name, timestamp) pair. Keys are extremely likely unique across
/// uploads; the same name uploaded twice within one second collides, which
/// the store's no-overwrite put rejects.
pub fn object_key(original_name: &str, timestamp: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}",
        timestamp.format("%Y%m%d_%H%M%S"),
        short_hash(original_name),
        original_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_key_is_deterministic() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 14, 20, 31, 7).unwrap();
        assert_eq!(object_key("anna.jpg", ts), object_key("anna.jpg", ts));
    }

    #[test]
    fn test_key_keeps_original_name_as_suffix() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 14, 20, 31, 7).unwrap();
        let key = object_key("anna.jpg", ts);
        assert!(key.ends_with("_anna.jpg"));
        assert!(key.starts_with("20250614_203107_"));
    }

    #[test]
    fn test_short_hash_is_eight_hex_chars() {
        let h = short_hash("party.mp4");
        assert_eq!(h.len(), 8);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_different_names_hash_differently() {
        assert_ne!(short_hash("a.jpg"), short_hash("b.jpg"));
    }
}
