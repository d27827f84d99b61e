//! Configuration reading for mlkit.
//!
//! This module parses caller-supplied YAML documents into a [`ConfigMap`], a
//! schema-free string-keyed mapping with subscript access. Any valid YAML
//! mapping is accepted; no schema is enforced. Callers that do have a fixed
//! schema should prefer [`read_yaml_as`] with a serde struct instead.

mod model;
mod operations;


// Re-export public API
pub use model::ConfigMap;
pub use operations::{read_yaml, read_yaml_as};
