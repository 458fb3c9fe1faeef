//! Snapshot capture persistence.

use crate::cas::FsStore;
use crate::errors::{from_rusqlite, Result};
use crate::snapshot::query::fetch_snapshot_row;
use chrono::SecondsFormat;
use ontologyops_core::errors::{ExError, ExErrorKind, VcError};
use ontologyops_core::snapshot::{CaptureRecord, SnapshotMetadata};
use rusqlite::{Connection, TransactionBehavior};

/// Result of a capture commit.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// The appended version-log entry
    pub entry: SnapshotMetadata,
    /// Sequence number of the appended entry
    pub seq: i64,
    /// False when the fingerprint was already stored
    pub created_snapshot: bool,
}

/// Persist the two CAS blobs of a capture record.
///
/// Returns `(statements_digest, index_digest)`.
fn persist_blobs(cas: &FsStore, record: &CaptureRecord) -> Result<(String, String)> {
    let statements_digest = cas.write(&record.canonical_bytes).map_err(|e| {
        ExError::new(ExErrorKind::Persistence)
            .with_op("persist_blobs")
            .with_fingerprint(record.fingerprint.clone())
            .with_message("Failed to write statements blob")
            .with_source(e)
    })?;

    let index_json = serde_json::to_vec(&record.index).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("persist_blobs")
            .with_message(format!("Failed to serialize entity index: {}", e))
    })?;
    let index_digest = cas.write(&index_json).map_err(|e| {
        ExError::new(ExErrorKind::Persistence)
            .with_op("persist_blobs")
            .with_fingerprint(record.fingerprint.clone())
            .with_message("Failed to write index blob")
            .with_source(e)
    })?;

    Ok((statements_digest, index_digest))
}

/// Commit a capture: blobs first, then ledger rows in one transaction.
///
/// 1. Write statements and index blobs to CAS (atomic, idempotent)
/// 2. `BEGIN IMMEDIATE`, serializing against every other writer
/// 3. Insert the snapshot row if the fingerprint is new; if it exists with a
///    different content digest, fail with `FingerprintCollision`
/// 4. Append the version-log entry and commit
///
/// A capture of already-stored content still appends a log entry.
///
/// ## Errors
///
/// - `FingerprintCollision`: fingerprint taken by different content
/// - `Concurrency`: the ledger lock could not be acquired in time
/// - `Persistence` / `Io`: CAS or database failure
pub fn commit_capture(
    conn: &mut Connection,
    cas: &FsStore,
    record: &CaptureRecord,
    author: &str,
    message: &str,
) -> Result<CaptureResult> {
    let (statements_digest, index_digest) = persist_blobs(cas, record)?;
    debug_assert_eq!(statements_digest, record.content_digest);

    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(from_rusqlite)?;

    let timestamp = chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let created_snapshot = match fetch_snapshot_row(&tx, &record.fingerprint)? {
        Some(existing) if existing.statements_digest != statements_digest => {
            return Err(VcError::FingerprintCollision {
                fingerprint: record.fingerprint.clone(),
                existing_digest: existing.statements_digest,
                new_digest: statements_digest,
            }
            .into());
        }
        Some(_) => false,
        None => {
            tx.execute(
                r#"
                INSERT INTO snapshots (
                    fingerprint,
                    statements_digest,
                    index_digest,
                    statement_count,
                    entity_count,
                    created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                rusqlite::params![
                    record.fingerprint,
                    statements_digest,
                    index_digest,
                    record.statement_count as i64,
                    record.entity_count as i64,
                    timestamp,
                ],
            )
            .map_err(from_rusqlite)?;
            true
        }
    };

    tx.execute(
        r#"
        INSERT INTO version_log (fingerprint, author, message, timestamp, entity_count)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        rusqlite::params![
            record.fingerprint,
            author,
            message,
            timestamp,
            record.entity_count as i64,
        ],
    )
    .map_err(from_rusqlite)?;
    let seq = tx.last_insert_rowid();

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(
        fingerprint = %record.fingerprint,
        seq,
        created_snapshot,
        "Committed capture"
    );

    Ok(CaptureResult {
        entry: SnapshotMetadata {
            fingerprint: record.fingerprint.clone(),
            author: author.to_string(),
            message: message.to_string(),
            timestamp,
            entity_count: record.entity_count,
        },
        seq,
        created_snapshot,
    })
}
