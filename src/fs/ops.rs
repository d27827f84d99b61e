//! Directory creation and file size lookup.

use crate::error::{MlkitError, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Ensure every directory in `paths` exists, in order.
///
/// Missing intermediate directories are created too; pre-existing
/// directories are left untouched, so the call is idempotent. When `verbose`
/// is set, one line is logged per path processed. `create_dir_all` cannot
/// tell a fresh create from a no-op, so the line says "ensured" rather than
/// claiming creation.
///
/// # Errors
///
/// [`MlkitError::Filesystem`] if any directory cannot be created (e.g.
/// permission denied); earlier directories in the sequence stay created.
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| MlkitError::from_io(path, e))?;
        if verbose {
            info!("ensured directory exists: {}", path.display());
        }
    }
    Ok(())
}

/// Size of the file at `path`, in raw bytes.
///
/// Logs one line reporting the size.
///
/// # Errors
///
/// [`MlkitError::NotFound`] if the path does not exist.
pub fn get_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| MlkitError::from_io(path, e))?;
    let size = metadata.len();
    info!("size of '{}': {} bytes", path.display(), size);
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use tempfile::TempDir;

    #[test]
    fn create_directories_creates_nested_paths() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let paths = [
            temp_dir.path().join("artifacts"),
            temp_dir.path().join("artifacts").join("training"),
            temp_dir.path().join("data").join("raw").join("images"),
        ];

        create_directories(&paths, true).unwrap();

        for path in &paths {
            assert!(path.is_dir());
        }
    }

    #[test]
    fn create_directories_is_idempotent() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let paths = [temp_dir.path().join("checkpoints")];

        create_directories(&paths, false).unwrap();
        create_directories(&paths, false).unwrap();

        assert!(paths[0].is_dir());
    }

    #[test]
    fn create_directories_accepts_existing_mix() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("existing");
        fs::create_dir(&existing).unwrap();

        let paths = [existing.clone(), temp_dir.path().join("fresh")];
        create_directories(&paths, true).unwrap();

        assert!(existing.is_dir());
        assert!(paths[1].is_dir());
    }

    #[test]
    fn get_size_reports_exact_byte_count() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weights.bin");
        fs::write(&path, vec![0u8; 1234]).unwrap();

        assert_eq!(get_size(&path).unwrap(), 1234);
    }

    #[test]
    fn get_size_of_empty_file_is_zero() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty");
        fs::write(&path, b"").unwrap();

        assert_eq!(get_size(&path).unwrap(), 0);
    }

    #[test]
    fn get_size_missing_file_is_not_found() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let err = get_size(temp_dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, MlkitError::NotFound(_)));
    }
}
