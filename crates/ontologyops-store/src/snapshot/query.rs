//! Read-only snapshot queries.
//!
//! Nothing here writes. A loaded snapshot is verified against its
//! fingerprint before it is returned.

use crate::cas::FsStore;
use crate::errors::{corrupt_snapshot, from_rusqlite, Result};
use ontologyops_core::errors::{ExErrorKind, VcError};
use ontologyops_core::model::{Snapshot, SnapshotIndex, StatementSet};
use ontologyops_core::snapshot::digest::hash_bytes;
use ontologyops_core::snapshot::{content_digest, SnapshotMetadata};
use rusqlite::{Connection, OptionalExtension, Row};

/// A raw row from the `snapshots` ledger table.
#[derive(Debug, Clone)]
pub struct SnapshotRow {
    pub fingerprint: String,
    /// Full SHA256 of the canonical statements blob
    pub statements_digest: String,
    /// SHA256 of the serialized index blob
    pub index_digest: String,
    pub statement_count: usize,
    pub entity_count: usize,
    /// RFC3339 time of the first capture
    pub created_at: String,
}

/// Version-log ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOrder {
    NewestFirst,
    OldestFirst,
}

impl LogOrder {
    fn sql(&self) -> &'static str {
        match self {
            LogOrder::NewestFirst => "DESC",
            LogOrder::OldestFirst => "ASC",
        }
    }
}

/// Fetch the ledger row for a fingerprint, if any.
///
/// # Errors
///
/// Returns `Persistence` if the query fails.
pub fn fetch_snapshot_row(conn: &Connection, fingerprint: &str) -> Result<Option<SnapshotRow>> {
    conn.query_row(
        r#"
        SELECT fingerprint, statements_digest, index_digest,
               statement_count, entity_count, created_at
        FROM snapshots
        WHERE fingerprint = ?1
        "#,
        [fingerprint],
        |row| {
            Ok(SnapshotRow {
                fingerprint: row.get(0)?,
                statements_digest: row.get(1)?,
                index_digest: row.get(2)?,
                statement_count: count_column(row, 3)?,
                entity_count: count_column(row, 4)?,
                created_at: row.get(5)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Non-negative count column; anything else is a decode failure.
fn count_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<usize> {
    let value: i64 = row.get(idx)?;
    usize::try_from(value).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(idx, value))
}

fn metadata_from_row(row: &Row<'_>) -> rusqlite::Result<SnapshotMetadata> {
    Ok(SnapshotMetadata {
        fingerprint: row.get(0)?,
        author: row.get(1)?,
        message: row.get(2)?,
        timestamp: row.get(3)?,
        entity_count: count_column(row, 4)?,
    })
}

/// All version-log entries in the requested order.
///
/// Entries are ordered by append sequence, not by timestamp.
///
/// # Errors
///
/// Returns `Persistence` if the query fails.
pub fn list_log(conn: &Connection, order: LogOrder) -> Result<Vec<SnapshotMetadata>> {
    let sql = format!(
        "SELECT fingerprint, author, message, timestamp, entity_count
         FROM version_log ORDER BY seq {}",
        order.sql()
    );
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let entries = stmt
        .query_map([], metadata_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(entries)
}

/// The earliest log entry for a fingerprint (the capture that created it).
///
/// # Errors
///
/// Returns `Persistence` if the query fails.
pub fn first_log_entry(conn: &Connection, fingerprint: &str) -> Result<Option<SnapshotMetadata>> {
    conn.query_row(
        "SELECT fingerprint, author, message, timestamp, entity_count
         FROM version_log WHERE fingerprint = ?1 ORDER BY seq ASC LIMIT 1",
        [fingerprint],
        metadata_from_row,
    )
    .optional()
    .map_err(from_rusqlite)
}

fn read_blob(cas: &FsStore, fingerprint: &str, digest: &str, what: &str) -> Result<Vec<u8>> {
    cas.read(digest).map_err(|e| {
        if e.kind() == ExErrorKind::NotFound {
            corrupt_snapshot(
                "load_snapshot",
                fingerprint,
                format!("{} blob {} is missing", what, digest),
            )
        } else {
            e
        }
    })
}

/// Load and verify a snapshot.
///
/// # Errors
///
/// - `NotFound` if no snapshot with this fingerprint exists
/// - `CorruptMetadata` if a blob is missing, fails to parse, or the
///   statements no longer hash to the recorded digest and fingerprint
/// - `Persistence` / `Io` on storage failure
pub fn load_snapshot(conn: &Connection, cas: &FsStore, fingerprint: &str) -> Result<Snapshot> {
    let row = fetch_snapshot_row(conn, fingerprint)?.ok_or_else(|| VcError::SnapshotNotFound {
        fingerprint: fingerprint.to_string(),
    })?;

    let statement_bytes = read_blob(cas, fingerprint, &row.statements_digest, "statements")?;
    let statements: StatementSet = serde_json::from_slice(&statement_bytes).map_err(|e| {
        corrupt_snapshot(
            "load_snapshot",
            fingerprint,
            format!("statements blob does not parse: {}", e),
        )
    })?;

    let digest = content_digest(&statements)?;
    if digest != row.statements_digest || !digest.starts_with(fingerprint) {
        return Err(corrupt_snapshot(
            "load_snapshot",
            fingerprint,
            format!(
                "statements hash to {} but ledger records {}",
                digest, row.statements_digest
            ),
        ));
    }

    let index_bytes = read_blob(cas, fingerprint, &row.index_digest, "index")?;
    let index_hash = hash_bytes(&index_bytes);
    if index_hash != row.index_digest {
        return Err(corrupt_snapshot(
            "load_snapshot",
            fingerprint,
            format!(
                "index blob hashes to {} but ledger records {}",
                index_hash, row.index_digest
            ),
        ));
    }
    let index: SnapshotIndex = serde_json::from_slice(&index_bytes).map_err(|e| {
        corrupt_snapshot(
            "load_snapshot",
            fingerprint,
            format!("index blob does not parse: {}", e),
        )
    })?;

    let metadata = first_log_entry(conn, fingerprint)?.ok_or_else(|| {
        corrupt_snapshot(
            "load_snapshot",
            fingerprint,
            "snapshot has no version-log entry",
        )
    })?;

    Ok(Snapshot {
        metadata,
        statements,
        index,
    })
}
