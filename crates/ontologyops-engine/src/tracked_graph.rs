//! Tracked-graph orchestration.
//!
//! A [`TrackedGraph`] is one graph's storage namespace plus the vocabulary
//! and fingerprint width it was opened with. Every public operation is
//! bracketed by `log_op_start!` / `log_op_end!` / `log_op_error!` and tags
//! errors with the operation name and a request id.

use crate::config::EngineConfig;
use crate::context::SnapshotContext;
use ontologyops_core::diff::{compute_diff, SemanticDiff};
use ontologyops_core::errors::{ExError, ExErrorKind};
use ontologyops_core::merge::{detect_conflicts, merge, ConflictReport, MergeStrategy};
use ontologyops_core::model::{EntityView, Snapshot, StatementSet};
use ontologyops_core::snapshot::{prepare_capture, SnapshotMetadata};
use ontologyops_core::vocabulary::Vocabulary;
use ontologyops_core::{log_op_end, log_op_error, log_op_start};
use ontologyops_core_types::RequestId;
use ontologyops_store::errors::Result;
use ontologyops_store::snapshot::CaptureResult;
use ontologyops_store::SnapshotStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Result of an engine-level merge. The merged set is never captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub statements: StatementSet,
    pub conflicts: ConflictReport,
}

/// Full version history, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryExport {
    pub graph: String,
    pub versions: Vec<SnapshotMetadata>,
    /// RFC3339 export time
    pub exported_at: String,
}

pub struct TrackedGraph {
    name: String,
    store: SnapshotStore,
    vocab: Vocabulary,
    fingerprint_length: usize,
}

fn validate_graph_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control);
    if bad {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("open_graph")
            .with_message(format!("invalid graph name '{}'", name)));
    }
    Ok(())
}

impl TrackedGraph {
    /// Open (creating if needed) `<storage_path>/<graph_name>`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is empty or contains a path separator
    /// - `InvalidConfig` if the configuration is invalid
    /// - store errors from opening the namespace
    pub fn open(config: &EngineConfig, graph_name: &str) -> Result<Self> {
        validate_graph_name(graph_name)?;
        config.validate()?;

        let store = SnapshotStore::open(config.storage_path().join(graph_name))?;
        Ok(Self {
            name: graph_name.to_string(),
            store,
            vocab: config.vocabulary(),
            fingerprint_length: config.fingerprint_length(),
        })
    }

    /// Open the graph tracked for an ontology file, named by its file stem.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the path has no usable stem; otherwise as [`TrackedGraph::open`].
    pub fn for_ontology(config: &EngineConfig, ontology_path: &Path) -> Result<Self> {
        let stem = ontology_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("open_graph")
                    .with_message(format!(
                        "cannot derive a graph name from {}",
                        ontology_path.display()
                    ))
            })?;
        Self::open(config, stem)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Run `f` as operation `op`: start/end/error events plus error context.
    fn instrumented<T>(&self, op: &str, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let request_id = RequestId::new();
        log_op_start!(op, graph = %self.name, request_id = %request_id);
        let start = Instant::now();

        let result = f(self).map_err(|e| tag_error(e, op, &request_id));

        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!(op, duration_ms = elapsed, graph = %self.name);
            }
            Err(e) => log_op_error!(op, e, duration_ms = elapsed, graph = %self.name),
        }
        result
    }

    /// Capture a statement set and return its fingerprint.
    ///
    /// Identical content captured again returns the same fingerprint and
    /// appends another log entry.
    ///
    /// # Errors
    ///
    /// `FingerprintCollision`, `Concurrency` or storage errors; nothing is
    /// appended on error.
    pub fn capture(
        &mut self,
        statements: &StatementSet,
        author: &str,
        message: &str,
    ) -> Result<String> {
        Ok(self
            .capture_detailed(statements, author, message)?
            .entry
            .fingerprint)
    }

    /// [`TrackedGraph::capture`] returning the appended entry and sequence.
    ///
    /// # Errors
    ///
    /// Same as [`TrackedGraph::capture`].
    pub fn capture_detailed(
        &mut self,
        statements: &StatementSet,
        author: &str,
        message: &str,
    ) -> Result<CaptureResult> {
        let request_id = RequestId::new();
        log_op_start!(
            "capture",
            graph = %self.name,
            request_id = %request_id,
            statement_count = statements.len()
        );
        let start = Instant::now();

        let result = prepare_capture(statements, &self.vocab, self.fingerprint_length)
            .map_err(ExError::from)
            .and_then(|record| self.store.capture(&record, author, message))
            .map_err(|e| tag_error(e, "capture", &request_id));

        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(r) => {
                log_op_end!(
                    "capture",
                    duration_ms = elapsed,
                    graph = %self.name,
                    fingerprint = %r.entry.fingerprint,
                    entity_count = r.entry.entity_count,
                    created_snapshot = r.created_snapshot
                );
            }
            Err(e) => log_op_error!("capture", e, duration_ms = elapsed, graph = %self.name),
        }
        result
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown fingerprint, `CorruptMetadata` if stored
    /// data fails verification.
    pub fn load(&self, fingerprint: &str) -> Result<Snapshot> {
        self.instrumented("load", |g| g.store.load(fingerprint))
    }

    /// Version log, newest first.
    ///
    /// # Errors
    ///
    /// Storage errors.
    pub fn log(&self) -> Result<Vec<SnapshotMetadata>> {
        self.instrumented("log", |g| g.store.log())
    }

    /// The exact statement set of a snapshot. Appends nothing to the log.
    ///
    /// # Errors
    ///
    /// Same as [`TrackedGraph::load`].
    pub fn restore(&self, fingerprint: &str) -> Result<StatementSet> {
        self.instrumented("restore", |g| g.store.restore(fingerprint))
    }

    /// Semantic diff from `a` to `b`.
    ///
    /// # Errors
    ///
    /// `NotFound` / `CorruptMetadata` from either side, unchanged.
    pub fn diff(&self, ctx: &mut SnapshotContext, a: &str, b: &str) -> Result<SemanticDiff> {
        self.instrumented("diff", |g| {
            let (sa, sb) = ctx.pair(&g.store, a, b)?;
            Ok(compute_diff(sa, sb, &g.vocab))
        })
    }

    /// Merge `a` and `b` under `strategy`, with the advisory conflict report.
    ///
    /// # Errors
    ///
    /// `NotFound` / `CorruptMetadata` from either side; `InvalidSelection`
    /// for a manual selection absent from its source.
    pub fn merge(
        &self,
        ctx: &mut SnapshotContext,
        a: &str,
        b: &str,
        strategy: &MergeStrategy,
    ) -> Result<MergeOutcome> {
        self.instrumented("merge", |g| {
            let (sa, sb) = ctx.pair(&g.store, a, b)?;
            let statements = merge(&sa.statements, &sb.statements, strategy)?;
            let conflicts = conflicts_between(sa, sb);
            Ok(MergeOutcome {
                statements,
                conflicts,
            })
        })
    }

    /// Entities whose profile differs between `a` and `b`.
    ///
    /// # Errors
    ///
    /// `NotFound` / `CorruptMetadata` from either side.
    pub fn detect_conflicts(
        &self,
        ctx: &mut SnapshotContext,
        a: &str,
        b: &str,
    ) -> Result<ConflictReport> {
        self.instrumented("detect_conflicts", |g| {
            let (sa, sb) = ctx.pair(&g.store, a, b)?;
            Ok(conflicts_between(sa, sb))
        })
    }

    /// Kind and profile of one entity in a snapshot.
    ///
    /// # Errors
    ///
    /// `NotFound` if the snapshot or the entity is absent.
    pub fn entity(
        &self,
        ctx: &mut SnapshotContext,
        fingerprint: &str,
        entity_id: &str,
    ) -> Result<EntityView> {
        self.instrumented("entity", |g| {
            let snapshot = ctx.snapshot(&g.store, fingerprint)?;
            Ok(snapshot.entity(entity_id)?)
        })
    }

    /// Full history, oldest first, for external reporting.
    ///
    /// # Errors
    ///
    /// Storage errors.
    pub fn export_history(&self) -> Result<HistoryExport> {
        self.instrumented("export_history", |g| {
            Ok(HistoryExport {
                graph: g.name.clone(),
                versions: g.store.history()?,
                exported_at: chrono::Utc::now().to_rfc3339(),
            })
        })
    }
}

fn conflicts_between(a: &Snapshot, b: &Snapshot) -> ConflictReport {
    detect_conflicts(
        &a.index.entities,
        &b.index.entities,
        &a.index.profiles,
        &b.index.profiles,
    )
}

/// Add operation and request context without overwriting what the
/// failing layer already set.
fn tag_error(err: ExError, op: &str, request_id: &RequestId) -> ExError {
    let err = if err.op().is_none() { err.with_op(op) } else { err };
    err.with_request_id(*request_id)
}
