//! Capture records.
//!
//! A capture record holds everything the store needs to persist a snapshot.
//! Building one is pure; persisting one is the store's job.

use crate::errors::Result;
use crate::extract::build_index;
use crate::model::{SnapshotIndex, StatementSet};
use crate::snapshot::digest::{canonical_bytes, hash_bytes, truncate, validate_length};
use crate::vocabulary::Vocabulary;

/// Derived data for one capture, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRecord {
    /// Truncated content fingerprint
    pub fingerprint: String,
    /// Full SHA256 of `canonical_bytes`
    pub content_digest: String,
    /// Canonical encoding of the statement set (persisted verbatim)
    pub canonical_bytes: Vec<u8>,
    /// Entity and profile index
    pub index: SnapshotIndex,
    /// Number of distinct statements
    pub statement_count: usize,
    /// Number of classified entities
    pub entity_count: usize,
}

/// Extract, encode and fingerprint a statement set.
///
/// ## Errors
///
/// - `VcError::InvalidFingerprintLength` if `fingerprint_length` is outside 8..=64
/// - `VcError::Serialization` if canonical encoding fails
pub fn prepare_capture(
    statements: &StatementSet,
    vocab: &Vocabulary,
    fingerprint_length: usize,
) -> Result<CaptureRecord> {
    validate_length(fingerprint_length)?;

    let canonical = canonical_bytes(statements)?;
    let content_digest = hash_bytes(&canonical);
    let index = build_index(statements, vocab);
    let entity_count = index.entities.len();

    Ok(CaptureRecord {
        fingerprint: truncate(&content_digest, fingerprint_length),
        content_digest,
        canonical_bytes: canonical,
        index,
        statement_count: statements.len(),
        entity_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statement;
    use crate::snapshot::digest::fingerprint;
    use crate::vocabulary::{owl, rdf};

    #[test]
    fn test_record_matches_fingerprint() {
        let statements: StatementSet = vec![
            Statement::new("ex:A", rdf::TYPE, owl::CLASS),
            Statement::literal("ex:A", "ex:label", "A"),
        ]
        .into_iter()
        .collect();
        let record = prepare_capture(&statements, &Vocabulary::default(), 16).unwrap();
        assert_eq!(record.fingerprint, fingerprint(&statements).unwrap());
        assert_eq!(record.statement_count, 2);
        assert_eq!(record.entity_count, 1);
        assert!(record.content_digest.starts_with(&record.fingerprint));
    }
}
