//! Filesystem utilities for mlkit.
//!
//! Structured file I/O for the project template: directory creation, file
//! size lookup, JSON and binary persistence. Everything this module writes
//! goes through the atomic write path (temp file + rename) so artifacts are
//! never left half-written.

pub mod atomic;
pub mod binary;
pub mod json;
mod ops;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
pub use binary::{load_bin, save_bin};
pub use json::{load_json, load_json_as, save_json};
pub use ops::{create_directories, get_size};
