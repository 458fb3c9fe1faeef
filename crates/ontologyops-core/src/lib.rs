//! OntologyOps Core - Semantic version control kernel
//!
//! This crate provides the pure, I/O-free part of ontology version control:
//! - Statement model (deduplicated, ordered triple sets)
//! - Vocabulary predicate separating schema machinery from domain data
//! - Entity extraction (class / property / individual) and per-entity profiles
//! - Order-independent content fingerprints
//! - Entity-level semantic diff
//! - Union / intersection / manual merge with advisory conflict detection
//!
//! Persistence lives in `ontologyops-store`; orchestration in `ontologyops-engine`.

pub mod diff;
pub mod errors;
pub mod extract;
pub mod graph;
pub mod logging_facility;
pub mod merge;
pub mod model;
pub mod snapshot;
pub mod vocabulary;

pub use ontologyops_core_types as core_types;

// Re-export commonly used types
pub use diff::{compute_diff, SemanticDiff};
pub use errors::{ExError, ExErrorKind, Result, VcError};
pub use extract::{build_index, extract, profile};
pub use graph::GraphLoader;
pub use merge::{detect_conflicts, merge, ConflictReport, MergeStrategy};
pub use model::{EntityIndex, EntityKind, ProfileIndex, Snapshot, SnapshotIndex, Statement, StatementSet};
pub use snapshot::{fingerprint, SnapshotMetadata};
pub use vocabulary::Vocabulary;
