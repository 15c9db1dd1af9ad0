//! Repl command - interactive session on stdin/stdout.

use std::io;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::AppError;
use crate::log_event;
use crate::repl::{Repl, ReplOptions};

/// Run the REPL until `exit` or end of input.
pub fn run(
    settings: &Settings,
    history_file: Option<PathBuf>,
    no_banner: bool,
) -> Result<(), AppError> {
    log_event!("app", "started", "environment {}", settings.environment);

    let mut options = ReplOptions::from(settings);
    options.banner &= !no_banner;
    // No ANSI codes when stdout is piped
    options.color &= console::colors_enabled();

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut repl = Repl::new(settings, stdin, stdout).with_options(options);
    if let Some(path) = history_file {
        repl = repl.with_history_path(path);
    }

    repl.run()?;
    log_event!("app", "exited");
    Ok(())
}
