//! Checksum calculation for curriculum deduplication.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of curriculum JSON content.
///
/// The ingestion layer uses this to recognize a course document it has
/// already seen, so a re-fetch of an unchanged curriculum is not stored
/// twice.
///
/// # Arguments
/// * `content` - JSON string content of the curriculum document
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
