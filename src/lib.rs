pub mod calculator;
pub mod cli;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod grades;
pub mod history;
pub mod logging;
pub mod repl;
pub mod stats;

pub use calculator::Calculator;
pub use command::{Command, CommandContext, CommandRegistry, Outcome};
pub use config::Settings;
pub use error::{AppError, CalcError, CommandError, DispatchError, ExportError, InputError};
pub use history::{History, HistoryEntry};
pub use repl::{Repl, ReplOptions};
pub use stats::Mode;
