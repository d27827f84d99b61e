//! Atomic file write operations.
//!
//! Every artifact this crate produces (JSON reports, binary artifacts,
//! decoded images) is written with the same discipline:
//!
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Atomically replace the target file
//!
//! On POSIX the final rename is atomic when source and destination are on
//! the same filesystem. On Windows an existing destination is removed first,
//! which narrows but does not close the replacement window. On crash, a
//! temporary file named `.{filename}.tmp` may remain in the target
//! directory.

use crate::error::{MlkitError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// The target file ends up containing exactly `content`, overwriting any
/// previous version; it is never observable in a partial state.
///
/// # Errors
///
/// [`MlkitError::Filesystem`] on any I/O failure along the way. The
/// temporary file is removed on every error path.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| MlkitError::from_io(parent, e))?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    atomic_replace(&temp_path, path)?;

    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around [`atomic_write`] for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MlkitError::Filesystem {
            path: target.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file path"),
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| MlkitError::from_io(path, e))?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        MlkitError::from_io(path, e)
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        MlkitError::from_io(path, e)
    })?;

    Ok(())
}

/// Replace the target file with the source file.
#[cfg(unix)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // rename() is atomic on POSIX and replaces an existing destination.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        MlkitError::from_io(target, e)
    })?;

    // Sync the parent directory so the new entry is durable.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Replace the target file with the source file.
#[cfg(windows)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // rename() fails on an existing destination on Windows; remove it first.
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            MlkitError::from_io(target, e)
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        MlkitError::from_io(target, e)
    })
}
