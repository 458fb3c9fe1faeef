//! Short-lived cache of loaded snapshots.
//!
//! One context lives for one logical operation (a diff, a merge plus its
//! conflict report, ...) and is dropped with it. Nothing is cached across
//! unrelated calls.

use ontologyops_core::errors::{ExError, ExErrorKind};
use ontologyops_core::model::Snapshot;
use ontologyops_store::errors::Result;
use ontologyops_store::SnapshotStore;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SnapshotContext {
    loaded: HashMap<String, Snapshot>,
    loads: usize,
}

impl SnapshotContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `fingerprint` from `store` unless it is already held.
    ///
    /// # Errors
    ///
    /// Propagates `NotFound` / `CorruptMetadata` from the store unchanged.
    pub fn ensure(&mut self, store: &SnapshotStore, fingerprint: &str) -> Result<()> {
        if !self.loaded.contains_key(fingerprint) {
            let snapshot = store.load(fingerprint)?;
            self.loads += 1;
            self.loaded.insert(fingerprint.to_string(), snapshot);
        }
        Ok(())
    }

    /// Load (if needed) and borrow one snapshot.
    ///
    /// # Errors
    ///
    /// Same as [`SnapshotContext::ensure`].
    pub fn snapshot(&mut self, store: &SnapshotStore, fingerprint: &str) -> Result<&Snapshot> {
        self.ensure(store, fingerprint)?;
        self.cached(fingerprint)
    }

    /// Load (if needed) and borrow two snapshots at once.
    ///
    /// # Errors
    ///
    /// Same as [`SnapshotContext::ensure`].
    pub fn pair(
        &mut self,
        store: &SnapshotStore,
        a: &str,
        b: &str,
    ) -> Result<(&Snapshot, &Snapshot)> {
        self.ensure(store, a)?;
        self.ensure(store, b)?;
        Ok((self.cached(a)?, self.cached(b)?))
    }

    fn cached(&self, fingerprint: &str) -> Result<&Snapshot> {
        self.loaded.get(fingerprint).ok_or_else(|| {
            ExError::new(ExErrorKind::Internal)
                .with_op("snapshot_context")
                .with_fingerprint(fingerprint)
                .with_message("snapshot missing after load")
        })
    }

    pub fn contains(&self, fingerprint: &str) -> bool {
        self.loaded.contains_key(fingerprint)
    }

    /// Number of store loads performed through this context.
    pub fn load_count(&self) -> usize {
        self.loads
    }
}
