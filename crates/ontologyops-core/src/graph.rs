//! Graph source seam.
//!
//! The core never parses file formats. A [`GraphLoader`] turns a path into
//! a statement set and writes one back.

use crate::errors::ExError;
use crate::model::StatementSet;
use std::path::Path;

/// Reads and writes statement sets at a filesystem path.
pub trait GraphLoader {
    /// Parse the graph stored at `path`.
    fn load(&self, path: &Path) -> Result<StatementSet, ExError>;

    /// Write `statements` to `path`, replacing its contents.
    fn write(&self, statements: &StatementSet, path: &Path) -> Result<(), ExError>;
}
