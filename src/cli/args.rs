//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Calculator REPL with grade statistics
#[derive(Parser, Debug)]
#[command(
    name = "gradecalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculator REPL with grade statistics",
    long_about = "Interactive calculator with a running total, plus mean, median, mode and \
                  standard deviation over entered grades. History is saved to CSV on exit.",
    after_help = "Examples:\n  gradecalc\n  gradecalc repl --history-file ./out/session.csv\n  gradecalc init\n  gradecalc config",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `repl`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start the interactive calculator
    #[command(about = "Start the interactive calculator (default)")]
    Repl {
        /// Where to save the history on exit (overrides config)
        #[arg(long, value_name = "PATH")]
        history_file: Option<PathBuf>,

        /// Skip the welcome text
        #[arg(long)]
        no_banner: bool,
    },

    /// Initialize project
    #[command(about = "Set up .gradecalc directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

impl Cli {
    /// Subcommand to run, `repl` when none was given.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Repl {
            history_file: None,
            no_banner: false,
        })
    }
}
