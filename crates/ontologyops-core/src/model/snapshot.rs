//! Loaded snapshot value.

use crate::errors::{Result, VcError};
use crate::model::entity::{EntityView, SnapshotIndex};
use crate::model::statement::StatementSet;
use crate::snapshot::metadata::SnapshotMetadata;

/// An immutable, fully loaded snapshot: content, derived index and metadata.
///
/// Diff and merge only ever read snapshots; nothing mutates one after capture.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub metadata: SnapshotMetadata,
    pub statements: StatementSet,
    pub index: SnapshotIndex,
}

impl Snapshot {
    /// The snapshot's fingerprint.
    pub fn fingerprint(&self) -> &str {
        &self.metadata.fingerprint
    }

    /// Look up one entity's kind and profile.
    ///
    /// # Errors
    ///
    /// Returns `VcError::EntityNotFound` if `id` is not in the entity index.
    pub fn entity(&self, id: &str) -> Result<EntityView> {
        let kind = self
            .index
            .entities
            .kind_of(id)
            .ok_or_else(|| VcError::EntityNotFound {
                fingerprint: self.metadata.fingerprint.clone(),
                entity_id: id.to_string(),
            })?;
        Ok(EntityView {
            id: id.to_string(),
            kind,
            profile: self.index.profiles.get(id).to_vec(),
        })
    }
}
