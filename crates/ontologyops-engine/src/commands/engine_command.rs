//! Engine-level write commands.

#![allow(clippy::result_large_err)]

use crate::tracked_graph::TrackedGraph;
use ontologyops_core::model::StatementSet;
use ontologyops_store::errors::Result;
use ontologyops_store::snapshot::CaptureResult;

/// Commands that append to a graph's version log.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Capture the current statements as a snapshot.
    Capture {
        statements: StatementSet,
        author: String,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Captured(CaptureResult),
}

/// Apply a write command to `graph`.
///
/// # Errors
///
/// Whatever the underlying graph operation returns.
pub fn apply_engine_command(
    cmd: EngineCommand,
    graph: &mut TrackedGraph,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Capture {
            statements,
            author,
            message,
        } => {
            let result = graph.capture_detailed(&statements, &author, &message)?;
            Ok(EngineCommandResult::Captured(result))
        }
    }
}
