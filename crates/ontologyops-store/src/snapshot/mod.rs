//! Snapshot persistence layer.
//!
//! Snapshots are stored as two CAS blobs (canonical statements and the
//! derived index) plus a row in the SQLite `snapshots` table. Every capture
//! appends one row to `version_log`.
//!
//! ## Responsibilities
//!
//! - Persist capture records to CAS and the ledger atomically
//! - Detect fingerprint collisions
//! - Load and verify snapshots
//! - Version-log queries (newest-first and oldest-first)
//!
//! ## Non-Responsibilities
//!
//! - Extraction and fingerprinting (handled by `ontologyops-core`)
//! - Orchestration (handled by `ontologyops-engine`)

pub mod persist;
pub mod query;

// Re-export primary types
pub use persist::{commit_capture, CaptureResult};
pub use query::{
    fetch_snapshot_row, first_log_entry, list_log, load_snapshot, LogOrder, SnapshotRow,
};
