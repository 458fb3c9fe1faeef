//! Snapshot domain logic.
//!
//! This module provides content fingerprinting and the capture record that
//! the store persists for every snapshot.
//!
//! ## Responsibilities
//!
//! - Canonical encoding of statement sets
//! - Deterministic, order-independent fingerprints
//! - Version-log metadata schema
//! - Capture records (canonical bytes + derived index + counts)
//!
//! ## Non-Responsibilities
//!
//! - Persistence (handled by `ontologyops-store`)
//! - Orchestration (handled by `ontologyops-engine`)

pub mod digest;
pub mod metadata;
pub mod record;

// Re-export primary types
pub use digest::{
    canonical_bytes, content_digest, fingerprint, fingerprint_with_length,
    DEFAULT_FINGERPRINT_LENGTH,
};
pub use metadata::SnapshotMetadata;
pub use record::{prepare_capture, CaptureRecord};
