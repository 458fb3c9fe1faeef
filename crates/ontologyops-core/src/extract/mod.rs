//! Entity extraction.
//!
//! Pure functions from a statement set to its entity index and profiles.
//! Nothing here keeps state between calls.

pub mod classify;
pub mod profile;

pub use classify::extract;
pub use profile::profile;

use crate::model::{SnapshotIndex, StatementSet};
use crate::vocabulary::Vocabulary;

/// Build the full derived index (entities plus profiles) for a statement set.
pub fn build_index(statements: &StatementSet, vocab: &Vocabulary) -> SnapshotIndex {
    SnapshotIndex {
        entities: extract(statements, vocab),
        profiles: profile(statements),
    }
}
