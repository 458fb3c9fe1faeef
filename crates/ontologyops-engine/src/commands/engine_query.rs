//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for read-only queries
//! against one tracked graph. Each call gets its own [`SnapshotContext`], so
//! a merge loads each side once for both the merged set and the conflict
//! report, and nothing is cached across calls.

#![allow(clippy::result_large_err)]

use crate::context::SnapshotContext;
use crate::tracked_graph::{HistoryExport, MergeOutcome, TrackedGraph};
use ontologyops_core::diff::{render_human_summary, SemanticDiff};
use ontologyops_core::merge::{ConflictReport, MergeStrategy};
use ontologyops_core::model::{EntityView, Snapshot, StatementSet};
use ontologyops_core::snapshot::SnapshotMetadata;
use ontologyops_store::errors::Result;

/// The structured and rendered result of a diff query.
#[derive(Debug, Clone)]
pub struct DiffResult {
    /// Machine-readable structured diff
    pub structured_diff: SemanticDiff,
    /// Human-readable Markdown summary
    pub human_summary: String,
}

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    Load {
        fingerprint: String,
    },
    /// Version log, newest first
    Log,
    Restore {
        fingerprint: String,
    },
    Diff {
        from: String,
        to: String,
    },
    Merge {
        a: String,
        b: String,
        strategy: MergeStrategy,
    },
    Conflicts {
        a: String,
        b: String,
    },
    Entity {
        fingerprint: String,
        entity_id: String,
    },
    ExportHistory,
}

#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    Snapshot(Box<Snapshot>),
    Log(Vec<SnapshotMetadata>),
    Statements(StatementSet),
    Diff(DiffResult),
    Merge(MergeOutcome),
    Conflicts(ConflictReport),
    Entity(EntityView),
    History(HistoryExport),
}

/// Run one read-only query against `graph`.
///
/// # Errors
///
/// Propagates the graph operation's error unchanged.
pub fn apply_engine_query(query: EngineQuery, graph: &TrackedGraph) -> Result<EngineQueryResult> {
    let mut ctx = SnapshotContext::new();
    match query {
        EngineQuery::Load { fingerprint } => Ok(EngineQueryResult::Snapshot(Box::new(
            graph.load(&fingerprint)?,
        ))),
        EngineQuery::Log => Ok(EngineQueryResult::Log(graph.log()?)),
        EngineQuery::Restore { fingerprint } => {
            Ok(EngineQueryResult::Statements(graph.restore(&fingerprint)?))
        }
        EngineQuery::Diff { from, to } => {
            let structured_diff = graph.diff(&mut ctx, &from, &to)?;
            let human_summary = render_human_summary(&structured_diff);
            Ok(EngineQueryResult::Diff(DiffResult {
                structured_diff,
                human_summary,
            }))
        }
        EngineQuery::Merge { a, b, strategy } => Ok(EngineQueryResult::Merge(graph.merge(
            &mut ctx, &a, &b, &strategy,
        )?)),
        EngineQuery::Conflicts { a, b } => Ok(EngineQueryResult::Conflicts(
            graph.detect_conflicts(&mut ctx, &a, &b)?,
        )),
        EngineQuery::Entity {
            fingerprint,
            entity_id,
        } => Ok(EngineQueryResult::Entity(graph.entity(
            &mut ctx,
            &fingerprint,
            &entity_id,
        )?)),
        EngineQuery::ExportHistory => Ok(EngineQueryResult::History(graph.export_history()?)),
    }
}
