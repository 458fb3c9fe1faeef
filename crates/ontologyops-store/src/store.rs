//! Per-graph snapshot store.
//!
//! Layout under the graph's namespace directory:
//!
//! ```text
//! <namespace>/ledger.db   SQLite ledger (snapshots, version_log, schema_version)
//! <namespace>/cas/        statements and index blobs, sharded by digest prefix
//! ```

use crate::cas::FsStore;
use crate::db;
use crate::errors::{io_error, Result};
use crate::migrations::apply_migrations;
use crate::snapshot::{
    commit_capture, fetch_snapshot_row, list_log, load_snapshot, CaptureResult, LogOrder,
};
use ontologyops_core::errors::VcError;
use ontologyops_core::model::{Snapshot, StatementSet};
use ontologyops_core::snapshot::{CaptureRecord, SnapshotMetadata};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

/// Ledger file name inside a namespace
pub const LEDGER_FILE: &str = "ledger.db";

/// CAS directory name inside a namespace
pub const CAS_DIR: &str = "cas";

/// Snapshot store for one tracked graph.
///
/// Each value owns its own connection; several values (in one process or
/// many) may write the same namespace concurrently.
pub struct SnapshotStore {
    namespace: PathBuf,
    conn: Connection,
    cas: FsStore,
}

impl SnapshotStore {
    /// Open the store rooted at `namespace`, creating it if needed.
    ///
    /// # Errors
    ///
    /// - `Io` if the directory cannot be created
    /// - `Persistence` / `CorruptMetadata` if the ledger cannot be opened or migrated
    pub fn open(namespace: impl Into<PathBuf>) -> Result<Self> {
        let namespace = namespace.into();
        fs::create_dir_all(namespace.join(CAS_DIR)).map_err(|e| io_error("open_store", e))?;

        let mut conn = db::open(namespace.join(LEDGER_FILE))?;
        apply_migrations(&mut conn)?;

        let cas = FsStore::new(namespace.join(CAS_DIR));
        tracing::debug!(namespace = %namespace.display(), "Opened snapshot store");

        Ok(Self {
            namespace,
            conn,
            cas,
        })
    }

    pub fn namespace(&self) -> &Path {
        &self.namespace
    }

    /// Persist a capture record and append its log entry.
    ///
    /// # Errors
    ///
    /// See [`commit_capture`].
    pub fn capture(
        &mut self,
        record: &CaptureRecord,
        author: &str,
        message: &str,
    ) -> Result<CaptureResult> {
        commit_capture(&mut self.conn, &self.cas, record, author, message)
    }

    /// Whether a snapshot with this fingerprint is stored.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the query fails.
    pub fn contains(&self, fingerprint: &str) -> Result<bool> {
        Ok(fetch_snapshot_row(&self.conn, fingerprint)?.is_some())
    }

    /// Load and verify a snapshot.
    ///
    /// # Errors
    ///
    /// See [`load_snapshot`].
    pub fn load(&self, fingerprint: &str) -> Result<Snapshot> {
        load_snapshot(&self.conn, &self.cas, fingerprint)
    }

    /// Version log, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the query fails.
    pub fn log(&self) -> Result<Vec<SnapshotMetadata>> {
        list_log(&self.conn, LogOrder::NewestFirst)
    }

    /// Version log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the query fails.
    pub fn history(&self) -> Result<Vec<SnapshotMetadata>> {
        list_log(&self.conn, LogOrder::OldestFirst)
    }

    /// The exact statement set captured under `fingerprint`.
    ///
    /// Appends nothing to the version log.
    ///
    /// # Errors
    ///
    /// Same as [`SnapshotStore::load`].
    pub fn restore(&self, fingerprint: &str) -> Result<StatementSet> {
        Ok(self.load(fingerprint)?.statements)
    }

    /// Fail with `NotFound` unless the fingerprint is stored.
    ///
    /// # Errors
    ///
    /// `NotFound` if absent; `Persistence` if the query fails.
    pub fn require(&self, fingerprint: &str) -> Result<()> {
        if self.contains(fingerprint)? {
            Ok(())
        } else {
            Err(VcError::SnapshotNotFound {
                fingerprint: fingerprint.to_string(),
            }
            .into())
        }
    }
}
