//! Version-log metadata schema.

use serde::{Deserialize, Serialize};

/// One version-log record.
///
/// Two records may share a fingerprint when identical content was captured
/// twice with different provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Content fingerprint of the captured statement set
    pub fingerprint: String,

    /// Author identifier (e.g. an email address)
    pub author: String,

    /// Commit message describing the change
    pub message: String,

    /// RFC3339 capture timestamp (UTC)
    pub timestamp: String,

    /// Number of classified entities across all kinds
    pub entity_count: usize,
}
