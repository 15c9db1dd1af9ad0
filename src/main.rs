use clap::Parser;
use gradecalc::cli::commands::{init, repl};
use gradecalc::cli::{Cli, Commands};
use gradecalc::error::AppError;
use gradecalc::{Settings, logging};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command_or_default() {
        // Runs before loading settings since it writes the settings file
        Commands::Init { force } => {
            init::run_init(Path::new("."), force, &mut io::stdout()).map(drop)
        }
        Commands::Config => {
            load_settings(&cli).and_then(|s| init::run_config(&s, &mut io::stdout()))
        }
        Commands::Repl {
            history_file,
            no_banner,
        } => run_repl(&cli, history_file, no_banner),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run_repl(cli: &Cli, history_file: Option<PathBuf>, no_banner: bool) -> Result<(), AppError> {
    let settings = load_settings(cli)?;
    logging::init_with_config(&settings.logging)?;
    tracing::info!(environment = %settings.environment, "Settings loaded");

    repl::run(&settings, history_file, no_banner).inspect_err(|e| tracing::error!("{e}"))
}

fn load_settings(cli: &Cli) -> Result<Settings, AppError> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}
