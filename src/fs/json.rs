//! JSON persistence for metrics, scores, and other report artifacts.

use crate::config::ConfigMap;
use crate::error::{MlkitError, Result};
use crate::fs::atomic_write;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

/// Save `data` as a pretty-printed JSON document at `path`.
///
/// The document is indented with 4 spaces and overwrites any existing file
/// (atomically). Logs one success line.
///
/// # Errors
///
/// * [`MlkitError::Serialization`] if `data` contains values JSON cannot
///   represent (e.g. a map with non-string keys)
/// * [`MlkitError::Filesystem`] if the file cannot be written
pub fn save_json<T, P>(path: P, data: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer).map_err(|e| {
        let err = MlkitError::Serialization {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        error!("failed to serialize JSON for '{}': {}", path.display(), e);
        err
    })?;
    buf.push(b'\n');

    atomic_write(path, &buf)?;

    info!("saved JSON file '{}'", path.display());
    Ok(())
}

/// Load a JSON document at `path` into a schema-free [`ConfigMap`].
///
/// Returns the same shape as [`crate::config::read_yaml`], so YAML configs
/// and JSON reports can flow through the same call sites. Logs one success
/// line; failures are logged at error level before being returned.
///
/// # Errors
///
/// * [`MlkitError::NotFound`] if the path does not resolve
/// * [`MlkitError::Parse`] if the content is not a valid JSON mapping
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ConfigMap> {
    let path = path.as_ref();

    let value: serde_json::Value = parse_json_file(path)?;
    let data = ConfigMap::from_value(value, path).map_err(|e| {
        error!("failed to parse JSON file '{}': {}", path.display(), e);
        e
    })?;

    info!("loaded JSON file '{}'", path.display());
    Ok(data)
}

/// Load a JSON document at `path` into a typed value.
///
/// Schema-aware counterpart of [`load_json`], mirroring
/// [`crate::config::read_yaml_as`].
pub fn load_json_as<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let value = parse_json_file(path)?;

    info!("loaded JSON file '{}'", path.display());
    Ok(value)
}

/// Read and parse `path` as JSON, logging failures.
fn parse_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        let err = MlkitError::from_io(path, e);
        error!("failed to read JSON file '{}': {}", path.display(), err);
        err
    })?;

    serde_json::from_str(&content).map_err(|e| {
        error!("failed to parse JSON file '{}': {}", path.display(), e);
        MlkitError::Parse {
            context: format!("JSON file '{}'", path.display()),
            message: e.to_string(),
        }
    })
}
