//! The generic configuration mapping type.

use crate::error::{MlkitError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Index;
use std::path::Path;

/// A schema-free configuration mapping.
///
/// Wraps a string-keyed map of arbitrary nested JSON-compatible values
/// (strings, numbers, booleans, nulls, sequences, nested mappings). Both
/// YAML and JSON documents parse into this one shape, so `read_yaml` and
/// `load_json` return interchangeable values.
///
/// Access is by subscript: `cfg["model"]["layers"]`. Indexing a missing key
/// on the map itself panics (like a lookup on a plain map); indexing into
/// the nested [`Value`]s follows serde_json semantics and yields `Null` for
/// missing keys, which keeps deep lookups ergonomic. Use [`ConfigMap::get`]
/// or the typed getters for fallible access.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(Map<String, Value>);

impl ConfigMap {
    /// Build a `ConfigMap` from a parsed document value.
    ///
    /// The top-level value must be a mapping; anything else (scalar,
    /// sequence, empty document) is a parse error, since every consumer of
    /// this type expects named fields.
    pub fn from_value(value: Value, context: &Path) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(ConfigMap(map)),
            other => Err(MlkitError::Parse {
                context: format!("'{}'", context.display()),
                message: format!(
                    "top-level value must be a mapping, got {}",
                    value_kind(&other)
                ),
            }),
        }
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the mapping contains `key` at the top level.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Top-level string value, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Top-level integer value, if present and an integer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Top-level float value, if present and numeric.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Top-level boolean value, if present and a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Consume the mapping and return the underlying value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Index<&str> for ConfigMap {
    type Output = Value;

    /// Panics if `key` is absent. Use [`ConfigMap::get`] for fallible access.
    fn index(&self, key: &str) -> &Value {
        self.0
            .get(key)
            .unwrap_or_else(|| panic!("no such config key: '{key}'"))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
