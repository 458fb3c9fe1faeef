//! OntologyOps Engine - Orchestration layer
//!
//! Ties the pure core (extraction, fingerprints, diff, merge) to the
//! per-graph snapshot store, and exposes the command/query surface the CLI
//! drives.

pub mod commands;
pub mod config;
pub mod context;
pub mod tracked_graph;

pub use config::EngineConfig;
pub use context::SnapshotContext;
pub use tracked_graph::{HistoryExport, MergeOutcome, TrackedGraph};
