//! mlkit: utility kit for machine-learning project templates.
//!
//! Three concerns, usable independently:
//!
//! - [`logging`] — explicit, idempotent process-wide logging setup writing
//!   to `logs/running_logs.log` and stdout.
//! - [`config`], [`fs`], [`image`] — stateless file I/O helpers: YAML
//!   configs, pretty-printed JSON reports, binary model artifacts, file
//!   sizes, base64 image encoding.
//! - [`cli`] / [`commands`] — the `mlkit scaffold` command that lays out
//!   the standard project tree.
//!
//! Every helper is a synchronous single-pass function; failures are logged
//! once at error level and propagated as [`error::MlkitError`], never
//! swallowed.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod image;
pub mod logging;

pub use config::{read_yaml, read_yaml_as, ConfigMap};
pub use error::{MlkitError, Result};
pub use fs::{create_directories, get_size, load_bin, load_json, load_json_as, save_bin, save_json};
pub use image::{decode_image, encode_image_base64};
