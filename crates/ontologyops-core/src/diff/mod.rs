//! Semantic diff engine.
//!
//! Compares the entity indices of two snapshots and reports changes at the
//! level of domain entities instead of text lines.
//!
//! ## Entry point
//!
//! ```ignore
//! use ontologyops_core::diff::compute_diff;
//!
//! let diff = compute_diff(&snapshot_a, &snapshot_b, &vocab);
//! println!("{}", diff.summary());
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical serialized output.
//! - **Symmetry**: `diff(A, B).entities_added == diff(B, A).entities_removed`.
//! - **Sparseness**: entities with unchanged profiles produce no entry.
//! - **Kind blindness**: reclassification alone is not a modification.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, compute_index_diff, relationship_edges};
pub use human_summary::render_human_summary;
pub use model::{ProfileChange, SemanticDiff};
