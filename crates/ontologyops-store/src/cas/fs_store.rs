//! Filesystem-based Content-Addressable Storage

use crate::cas::atomic::atomic_write;
use crate::cas::sharding::shard_path;
use crate::errors::{cas_collision, cas_missing, io_error, Result};
use ontologyops_core::snapshot::digest::hash_bytes;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension of every blob this store writes
const BLOB_EXTENSION: &str = "json";

/// Filesystem-based CAS store
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a CAS store rooted at `root`; directories are created lazily
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write content and return its SHA256 digest
    ///
    /// Idempotent for identical content.
    ///
    /// # Errors
    ///
    /// - `CorruptMetadata` if a blob with this digest exists with different bytes
    /// - `Io` if the write fails
    pub fn write(&self, content: &[u8]) -> Result<String> {
        let digest = hash_bytes(content);
        let target_path = self.blob_path(&digest);

        match fs::read(&target_path) {
            Ok(existing) if existing == content => return Ok(digest),
            Ok(_) => return Err(cas_collision(&digest)),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(io_error("read_cas", e)),
        }

        atomic_write(&target_path, content)?;
        tracing::debug!(digest = %digest, size_bytes = content.len(), "Wrote CAS blob");
        Ok(digest)
    }

    /// Read a blob by digest
    ///
    /// # Errors
    ///
    /// - `NotFound` if no blob exists for `digest`
    /// - `Io` if the read fails
    pub fn read(&self, digest: &str) -> Result<Vec<u8>> {
        match fs::read(self.blob_path(digest)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(cas_missing(digest)),
            Err(e) => Err(io_error("read_cas", e)),
        }
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.blob_path(digest).is_file()
    }

    fn blob_path(&self, digest: &str) -> PathBuf {
        shard_path(&self.root, digest, BLOB_EXTENSION)
    }
}
