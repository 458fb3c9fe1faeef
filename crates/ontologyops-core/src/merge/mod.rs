//! Merge engine.
//!
//! Combines the statement sets of two snapshots under an explicit strategy,
//! and independently reports entities whose profiles diverge.
//!
//! Conflicts are advisory: [`merge`] never consults them.

pub mod conflicts;
pub mod strategy;

pub use conflicts::{detect_conflicts, ConflictEntry, ConflictReport};
pub use strategy::{merge, MergeStrategy};
