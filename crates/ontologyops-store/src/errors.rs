//! Error handling for ontologyops-store
//!
//! Wraps ontologyops-core ExError with store-specific helpers

use ontologyops_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::CorruptMetadata)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a CAS collision error
pub fn cas_collision(digest: &str) -> ExError {
    ExError::new(ExErrorKind::CorruptMetadata)
        .with_op("cas_write")
        .with_message(format!(
            "CAS blob for digest {} exists with different content",
            digest
        ))
}

/// Create a CAS missing blob error
pub fn cas_missing(digest: &str) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("cas_read")
        .with_message(format!("CAS blob not found for digest {}", digest))
}

/// Create a corrupt snapshot error
pub fn corrupt_snapshot(op: &str, fingerprint: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::CorruptMetadata)
        .with_op(op.to_string())
        .with_fingerprint(fingerprint)
        .with_message(reason)
}

/// Create a graph parse error
pub fn parse_error(path: &str, line: usize, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Parse)
        .with_op("graph_load")
        .with_message(format!("{}:{}: {}", path, line, reason))
}

/// Create a database error from rusqlite::Error
///
/// Lock contention that outlasted the busy timeout maps to `Concurrency`.
/// A row that does not decode, or a ledger file SQLite cannot read as a
/// database, maps to `CorruptMetadata`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) => match e.code {
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => ExErrorKind::Concurrency,
            ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt => ExErrorKind::CorruptMetadata,
            _ => ExErrorKind::Persistence,
        },
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => ExErrorKind::CorruptMetadata,
        _ => ExErrorKind::Persistence,
    };
    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
