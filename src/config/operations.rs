//! YAML loading operations.

use super::model::ConfigMap;
use crate::error::{MlkitError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{error, info};

/// Read a YAML file into a schema-free [`ConfigMap`].
///
/// The file is re-read and re-parsed on every call; nothing is cached.
/// Failures are logged once at error level and returned:
///
/// * [`MlkitError::NotFound`] if the path does not resolve
/// * [`MlkitError::Parse`] if the content is not a valid YAML mapping
pub fn read_yaml<P: AsRef<Path>>(path: P) -> Result<ConfigMap> {
    let path = path.as_ref();

    let value = parse_yaml_value(path)?;
    let config = ConfigMap::from_value(value, path).map_err(|e| {
        error!("failed to parse YAML file '{}': {}", path.display(), e);
        e
    })?;

    info!("loaded YAML file '{}'", path.display());
    Ok(config)
}

/// Read a YAML file into a typed value.
///
/// The schema-aware counterpart of [`read_yaml`]: deserializes straight into
/// `T`, so unknown shapes fail at the parse boundary instead of at lookup
/// time. Same failure modes and logging policy as [`read_yaml`].
pub fn read_yaml_as<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let content = read_file_logged(path)?;
    let value: T = serde_yaml::from_str(&content).map_err(|e| {
        error!("failed to parse YAML file '{}': {}", path.display(), e);
        MlkitError::Parse {
            context: format!("YAML file '{}'", path.display()),
            message: e.to_string(),
        }
    })?;

    info!("loaded YAML file '{}'", path.display());
    Ok(value)
}

/// Read and parse `path` into a generic document value, logging failures.
fn parse_yaml_value(path: &Path) -> Result<serde_json::Value> {
    let content = read_file_logged(path)?;

    serde_yaml::from_str(&content).map_err(|e| {
        error!("failed to parse YAML file '{}': {}", path.display(), e);
        MlkitError::Parse {
            context: format!("YAML file '{}'", path.display()),
            message: e.to_string(),
        }
    })
}

/// Read a file to a string, logging the failure before returning it.
fn read_file_logged(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        let err = MlkitError::from_io(path, e);
        error!("failed to read YAML file '{}': {}", path.display(), err);
        err
    })
}
