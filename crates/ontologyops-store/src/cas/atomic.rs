//! Atomic write primitives
//!
//! A target path only ever holds complete content: bytes go to a uniquely
//! named sibling temp file which is then renamed over the target.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn temp_sibling(target_path: &Path) -> PathBuf {
    let name = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target_path.with_file_name(format!(".{}.{}.tmp", name, uuid::Uuid::new_v4().simple()))
}

/// Atomically write bytes to a file
///
/// Concurrent writers never share a temp file, so each rename publishes one
/// writer's full content.
///
/// # Errors
///
/// Returns `Io` if the directory, temp file or rename fails. The temp file
/// is removed on a failed rename.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_dir", e))?;
        }
    }

    let temp_path = temp_sibling(target_path);
    fs::write(&temp_path, content).map_err(|e| io_error("write_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_temp", e));
    }

    Ok(())
}
