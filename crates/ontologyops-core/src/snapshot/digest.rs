//! Content fingerprints for statement sets.
//!
//! ## Algorithm
//!
//! 1. Every statement becomes a `[subject, predicate, object]` string triple
//! 2. Triples are deduplicated and sorted lexicographically
//! 3. The sorted list is encoded as a compact JSON array (canonical bytes)
//! 4. SHA256 over the canonical bytes, hex-encoded
//! 5. The fingerprint is the first N hex characters (16 by default)
//!
//! ## Determinism Guarantees
//!
//! - Insertion order never affects the output
//! - Duplicate statements are counted once
//! - Any added, removed or changed statement changes the digest

use crate::errors::{Result, VcError};
use crate::model::StatementSet;
use sha2::{Digest, Sha256};

/// Default fingerprint length in hex characters.
pub const DEFAULT_FINGERPRINT_LENGTH: usize = 16;

/// Shortest accepted fingerprint length.
pub const MIN_FINGERPRINT_LENGTH: usize = 8;

/// Longest accepted fingerprint length (a full SHA256 hex digest).
pub const MAX_FINGERPRINT_LENGTH: usize = 64;

/// Canonical encoding of a statement set.
///
/// `StatementSet` is already deduplicated and iterates in sorted order, so the
/// JSON array of its triples is canonical.
///
/// ## Errors
///
/// Returns `VcError::Serialization` if JSON serialization fails.
pub fn canonical_bytes(statements: &StatementSet) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(statements)?)
}

/// Full hex-encoded SHA256 digest (64 characters) of the canonical encoding.
///
/// ## Errors
///
/// Returns `VcError::Serialization` if JSON serialization fails.
pub fn content_digest(statements: &StatementSet) -> Result<String> {
    Ok(hash_bytes(&canonical_bytes(statements)?))
}

/// Compute the 16-character fingerprint of a statement set.
///
/// ## Errors
///
/// Returns `VcError::Serialization` if JSON serialization fails.
///
/// ## Example
///
/// ```
/// use ontologyops_core::model::{Statement, StatementSet};
/// use ontologyops_core::snapshot::digest::fingerprint;
///
/// let statements: StatementSet = vec![Statement::new("ex:a", "ex:p", "ex:b")]
///     .into_iter()
///     .collect();
/// let fp = fingerprint(&statements).unwrap();
/// assert_eq!(fp.len(), 16);
/// ```
pub fn fingerprint(statements: &StatementSet) -> Result<String> {
    fingerprint_with_length(statements, DEFAULT_FINGERPRINT_LENGTH)
}

/// Compute a fingerprint truncated to `length` hex characters.
///
/// ## Errors
///
/// - `VcError::InvalidFingerprintLength` if `length` is outside 8..=64
/// - `VcError::Serialization` if JSON serialization fails
pub fn fingerprint_with_length(statements: &StatementSet, length: usize) -> Result<String> {
    validate_length(length)?;
    let digest = content_digest(statements)?;
    Ok(truncate(&digest, length))
}

/// Check a configured fingerprint length.
///
/// ## Errors
///
/// Returns `VcError::InvalidFingerprintLength` if `length` is outside 8..=64.
pub fn validate_length(length: usize) -> Result<()> {
    if (MIN_FINGERPRINT_LENGTH..=MAX_FINGERPRINT_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(VcError::InvalidFingerprintLength { length })
    }
}

/// Shorten a full digest to a fingerprint.
pub(crate) fn truncate(digest: &str, length: usize) -> String {
    digest.chars().take(length).collect()
}

/// Hash bytes using SHA256.
pub fn hash_bytes(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statement;

    #[test]
    fn test_hash_bytes_deterministic() {
        let hash1 = hash_bytes(b"test");
        let hash2 = hash_bytes(b"test");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // SHA256 hex length
    }

    #[test]
    fn test_canonical_bytes_shape() {
        let statements: StatementSet = vec![
            Statement::new("ex:b", "ex:p", "ex:c"),
            Statement::new("ex:a", "ex:p", "ex:c"),
        ]
        .into_iter()
        .collect();
        let bytes = canonical_bytes(&statements).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"[["ex:a","ex:p","ex:c"],["ex:b","ex:p","ex:c"]]"#
        );
    }

    #[test]
    fn test_fingerprint_is_digest_prefix() {
        let statements: StatementSet = vec![Statement::new("ex:a", "ex:p", "ex:b")]
            .into_iter()
            .collect();
        let digest = content_digest(&statements).unwrap();
        let fp = fingerprint(&statements).unwrap();
        assert!(digest.starts_with(&fp));
    }

    #[test]
    fn test_length_bounds() {
        let statements = StatementSet::new();
        assert!(fingerprint_with_length(&statements, 7).is_err());
        assert_eq!(fingerprint_with_length(&statements, 8).unwrap().len(), 8);
        assert_eq!(fingerprint_with_length(&statements, 64).unwrap().len(), 64);
        assert!(fingerprint_with_length(&statements, 65).is_err());
    }
}
