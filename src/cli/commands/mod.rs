//! CLI command handlers for `scholar`.
//!
//! Each subcommand lives in its own submodule. Handlers return
//! `Err(message)` with a printable message; `main` prints it and exits 1.

pub mod config;
pub mod gpa;
pub mod graph;
pub mod progress;
pub mod report;

use scholar_analytics::config::Config;
use scholar_analytics::core::loader::{load_record_with, RecordDefaults};
use scholar_analytics::core::store::Workspace;
use scholar_analytics::{error, verbose, warn};
use std::path::{Path, PathBuf};

/// Record file given on the command line, else config `data_file`
fn resolve_record_path(input_file: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    match input_file {
        Some(path) => Ok(path.to_path_buf()),
        None if config.paths.data_file.is_empty() => Err(
            "✗ No record file given and config `data_file` is empty (see `scholar config set data_file PATH`)"
                .to_string(),
        ),
        None => Ok(PathBuf::from(&config.paths.data_file)),
    }
}

/// Load and validate the academic record
pub fn load_workspace(input_file: Option<&Path>, config: &Config) -> Result<Workspace, String> {
    let path = resolve_record_path(input_file, config)?;
    verbose!("Reading academic record from {}", path.display());

    let workspace = load_record_with(&path, &RecordDefaults::from(config)).map_err(|e| {
        error!("Failed to load record {}: {e}", path.display());
        format!("✗ {e}")
    })?;

    if let Err(problems) = workspace.validate() {
        for problem in &problems {
            warn!("{problem}");
        }
        return Err(format!(
            "✗ {} has {} problem(s):\n  - {}",
            path.display(),
            problems.len(),
            problems.join("\n  - ")
        ));
    }

    Ok(workspace)
}
