//! Binary persistence for model artifacts.
//!
//! Encodes any serde-serializable value with bincode. The on-disk format is
//! opaque and coupled to the bincode version that wrote it; artifacts are
//! not portable across incompatible versions. That is an accepted constraint
//! for locally produced training artifacts, not a defect.

use crate::error::{MlkitError, Result};
use crate::fs::atomic_write;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

/// Serialize `data` to a binary artifact at `path`.
///
/// Overwrites any existing file (atomically). Logs one success line.
///
/// # Errors
///
/// * [`MlkitError::Serialization`] if the value cannot be encoded
/// * [`MlkitError::Filesystem`] if the file cannot be written
pub fn save_bin<T, P>(path: P, data: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = bincode::serialize(data).map_err(|e| {
        error!("failed to encode binary artifact '{}': {}", path.display(), e);
        MlkitError::Serialization {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    atomic_write(path, &bytes)?;

    info!("saved binary file '{}'", path.display());
    Ok(())
}

/// Deserialize a binary artifact written by [`save_bin`].
///
/// Logs one success line.
///
/// # Errors
///
/// * [`MlkitError::NotFound`] if the file is missing
/// * [`MlkitError::Serialization`] if the content is corrupt or was written
///   for a different type or bincode version
pub fn load_bin<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| {
        let err = MlkitError::from_io(path, e);
        error!("failed to read binary file '{}': {}", path.display(), err);
        err
    })?;

    let data = bincode::deserialize(&bytes).map_err(|e| {
        error!("failed to decode binary artifact '{}': {}", path.display(), e);
        MlkitError::Serialization {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    info!("loaded binary file '{}'", path.display());
    Ok(data)
}
