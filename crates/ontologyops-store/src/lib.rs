//! OntologyOps Store - Snapshot persistence with SQLite and CAS
//!
//! Provides:
//! - Content-addressable storage (CAS) for statement and index blobs
//! - SQLite version ledger with embedded, checksummed migrations
//! - Snapshot capture, load and version-log queries
//! - N-Triples graph loader/writer

pub mod cas;
pub mod db;
pub mod errors;
pub mod graph_io;
pub mod migrations;
pub mod snapshot;
pub mod store;

// Re-export key types
pub use errors::Result;
pub use graph_io::NTriplesLoader;
pub use store::SnapshotStore;
