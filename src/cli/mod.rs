//! CLI argument parsing for mlkit.
//!
//! Uses clap derive macros for declarative argument definitions. Command
//! implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// mlkit: utility kit for machine-learning project templates.
///
/// Provides structured file I/O helpers as a library and a one-shot
/// scaffolding command that lays out the standard ML project tree.
#[derive(Parser, Debug)]
#[command(name = "mlkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse CLI arguments from the process environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for mlkit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the ML project template tree.
    ///
    /// Lays out the standard directories and empty placeholder files for a
    /// new project. Existing files are left untouched, so re-running is
    /// safe.
    Scaffold(ScaffoldArgs),
}

/// Arguments for the `scaffold` command.
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Project name used for the source package directory.
    #[arg(long, default_value = "CNN-Classifier")]
    pub name: String,

    /// Directory to scaffold into (created if absent).
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
