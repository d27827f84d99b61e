//! Error types for the mlkit utility layer.
//!
//! Uses thiserror for derive macros. The taxonomy is deliberately small:
//! every helper in this crate fails in one of four ways, and no helper ever
//! swallows an error — failures are logged once and returned to the caller.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for mlkit operations.
///
/// Each variant maps to a specific process exit code so the CLI can report
/// the failure class to scripts driving it.
#[derive(Error, Debug)]
pub enum MlkitError {
    /// The given path does not resolve to an existing file or directory.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Content at the given path (or inline input) is malformed: invalid
    /// YAML, invalid JSON, or an invalid base64 string.
    #[error("failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    /// A value could not be converted to or from its on-disk representation
    /// (JSON document, bincode artifact).
    #[error("serialization failed for '{path}': {message}")]
    Serialization { path: PathBuf, message: String },

    /// An OS-level I/O failure other than a missing path: permissions,
    /// disk-full, and similar.
    #[error("filesystem error at '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MlkitError {
    /// Classify an I/O error for `path` into the crate taxonomy.
    ///
    /// `NotFound` gets its own variant; everything else is a filesystem
    /// failure carried verbatim.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            MlkitError::NotFound(path.to_path_buf())
        } else {
            MlkitError::Filesystem {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MlkitError::NotFound(_) => exit_codes::NOT_FOUND,
            MlkitError::Parse { .. } => exit_codes::PARSE_FAILURE,
            MlkitError::Serialization { .. } => exit_codes::SERIALIZATION_FAILURE,
            MlkitError::Filesystem { .. } => exit_codes::FILESYSTEM_FAILURE,
        }
    }
}

/// Result type alias for mlkit operations.
pub type Result<T> = std::result::Result<T, MlkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_exit_code() {
        let err = MlkitError::NotFound(PathBuf::from("config.yaml"));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = MlkitError::Parse {
            context: "params.yaml".to_string(),
            message: "bad indent".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn serialization_error_has_correct_exit_code() {
        let err = MlkitError::Serialization {
            path: PathBuf::from("model.bin"),
            message: "unsupported value".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::SERIALIZATION_FAILURE);
    }

    #[test]
    fn filesystem_error_has_correct_exit_code() {
        let err = MlkitError::Filesystem {
            path: PathBuf::from("logs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), exit_codes::FILESYSTEM_FAILURE);
    }

    #[test]
    fn from_io_classifies_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MlkitError::from_io(Path::new("scores.json"), io);
        assert!(matches!(err, MlkitError::NotFound(_)));
    }

    #[test]
    fn from_io_keeps_other_kinds_as_filesystem() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MlkitError::from_io(Path::new("scores.json"), io);
        assert!(matches!(err, MlkitError::Filesystem { .. }));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = MlkitError::NotFound(PathBuf::from("config/config.yaml"));
        assert_eq!(err.to_string(), "file not found: config/config.yaml");

        let err = MlkitError::Parse {
            context: "base64 image data".to_string(),
            message: "invalid symbol".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse base64 image data: invalid symbol"
        );
    }
}
