//! Implementation of the `mlkit scaffold` command.
//!
//! Lays out the standard ML project template: workflow and source package
//! directories plus empty placeholder files (configs, pipeline entrypoints,
//! a research notebook). The command is idempotent: directories and files
//! that already exist are reported and left untouched, so it can be re-run
//! against a partially scaffolded project.

use crate::cli::ScaffoldArgs;
use crate::error::{MlkitError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Relative paths of the template tree, parameterized by project name.
///
/// Every entry is a file; parent directories are derived from the list.
pub fn template_paths(name: &str) -> Vec<PathBuf> {
    [
        ".github/workflows/.gitkeep".to_string(),
        format!("src/{name}/__init__.py"),
        format!("src/{name}/components/__init__.py"),
        format!("src/{name}/utils/__init__.py"),
        format!("src/{name}/config/configuration.py"),
        format!("src/{name}/pipeline/__init__.py"),
        format!("src/{name}/entity/__init__.py"),
        format!("src/{name}/constants/__init__.py"),
        "config/config.yaml".to_string(),
        "params.yaml".to_string(),
        "dvc.yaml".to_string(),
        "requirements.txt".to_string(),
        "setup.py".to_string(),
        "research/trial.ipynb".to_string(),
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Execute the `mlkit scaffold` command.
pub fn cmd_scaffold(args: &ScaffoldArgs) -> Result<()> {
    let summary = scaffold_project(&args.root, &args.name)?;

    println!("Scaffolded project template '{}'.", args.name);
    println!();
    println!(
        "{} file(s) created, {} already present.",
        summary.created, summary.skipped
    );
    println!("You can now fill in config/config.yaml and params.yaml.");

    Ok(())
}

/// Counts of what a scaffold run actually touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldSummary {
    /// Files created by this run.
    pub created: usize,
    /// Files that already existed and were left untouched.
    pub skipped: usize,
}

/// Create the template tree for `name` under `root`.
///
/// For each template path: the parent directory is created if absent (one
/// log line per directory created), then the file is created empty if
/// absent. Pre-existing files are logged and preserved.
pub fn scaffold_project(root: &Path, name: &str) -> Result<ScaffoldSummary> {
    let mut summary = ScaffoldSummary {
        created: 0,
        skipped: 0,
    };

    for relative in template_paths(name) {
        let path = root.join(&relative);

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| MlkitError::from_io(dir, e))?;
            info!("creating directory: {}", dir.display());
        }

        if path.exists() {
            info!("file already exists: {}", path.display());
            summary.skipped += 1;
        } else {
            fs::write(&path, b"").map_err(|e| MlkitError::from_io(&path, e))?;
            info!("creating file: {}", path.display());
            summary.created += 1;
        }
    }

    Ok(summary)
}
