//! Domain models for ontology version control.

pub mod entity;
pub mod snapshot;
pub mod statement;

pub use entity::{EntityIndex, EntityKind, EntityView, ProfileIndex, ProfilePair, SnapshotIndex};
pub use snapshot::Snapshot;
pub use statement::{Statement, StatementSet};
