//! Command implementations for mlkit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod scaffold;

pub use scaffold::{scaffold_project, template_paths, ScaffoldSummary};

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Scaffold(args) => scaffold::cmd_scaffold(&args),
    }
}
