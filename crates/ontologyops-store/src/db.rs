//! Database connection management

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits for the ledger lock before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Open and configure the SQLite ledger at `path`
///
/// # Errors
///
/// Returns `CorruptMetadata` if the file is not a readable SQLite database,
/// `Persistence` if it cannot be opened or configured otherwise.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
///
/// Returns `Persistence` if SQLite cannot allocate the database.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Apply connection settings
///
/// The busy timeout goes first so that the WAL switch itself waits for
/// concurrent openers instead of failing.
///
/// # Errors
///
/// Returns `Persistence` if a pragma fails.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;
    Ok(())
}
