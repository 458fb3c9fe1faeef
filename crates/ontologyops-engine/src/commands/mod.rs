//! Command and query surface over a [`TrackedGraph`](crate::TrackedGraph).
//!
//! Writes go through [`apply_engine_command`]; everything else is a
//! read-only [`apply_engine_query`].

pub mod engine_command;
pub mod engine_query;

pub use engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use engine_query::{apply_engine_query, DiffResult, EngineQuery, EngineQueryResult};
