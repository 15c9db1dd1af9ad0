//! `init` and `config` subcommands.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::Settings;
use crate::error::AppError;

/// Write a default settings file under `root` and report where it went.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run_init(root: &Path, force: bool, out: &mut dyn Write) -> Result<PathBuf, AppError> {
    let path = Settings::init_config_file(root, force)?;
    writeln!(out, "Created configuration file at: {}", path.display())?;
    writeln!(out, "Edit this file to customize your settings.")?;
    Ok(path)
}

/// Print the effective settings after every layer has been applied.
pub fn run_config(settings: &Settings, out: &mut dyn Write) -> Result<(), AppError> {
    let rendered = toml::to_string_pretty(settings).context("rendering settings as TOML")?;
    writeln!(out, "Current Configuration:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
