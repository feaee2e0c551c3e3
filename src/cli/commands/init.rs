use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use super::super::args::InitCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into the source root.
///
/// An existing file is never overwritten.
pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let root = cmd.source_root.unwrap_or_else(|| PathBuf::from("."));
    let config_path = root.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    debug!(path = %config_path.display(), "wrote default configuration");

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    println!("  Run `jsmsg check` to validate message definitions.");

    Ok(ExitStatus::Success)
}
