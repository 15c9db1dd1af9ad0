//! Error types for the calculator, command dispatch and application shell.
//!
//! Everything below `AppError` is recoverable: the REPL reports it and keeps
//! reading input. Only `AppError` terminates the process.

use std::path::PathBuf;
use thiserror::Error;

use crate::logging::LoggingError;

/// Failures of calculator arithmetic and statistics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("No values to calculate {statistic}. Add values or enter grades first.")]
    EmptyDataset { statistic: &'static str },
}

/// Malformed REPL input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Please enter a command followed by a value (e.g., '{command} 5').")]
    MissingOperand { command: String },

    #[error("'{command}' does not take a value.")]
    UnexpectedOperand { command: String },

    #[error("'{token}' is not a valid number.")]
    InvalidNumber { token: String },

    #[error("Too many arguments. Expected '<command> [<number>]'.")]
    TooManyArguments,
}

/// CSV read/write failures.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Failure raised by a single command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure at the registry boundary.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    #[error("{source}")]
    Failed {
        command: String,
        #[source]
        source: CommandError,
    },

    #[error("Command '{command}' panicked.")]
    Panicked { command: String },
}

/// Unrecoverable errors that end the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error("Failed to save history: {0}")]
    HistorySave(#[source] ExportError),

    #[error("{0:#}")]
    Setup(#[from] anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Logging(_) => 3,
            AppError::HistorySave(_) => 4,
            AppError::Setup(_) | AppError::Io(_) => 1,
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
