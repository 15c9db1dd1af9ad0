//! Interactive read-eval-print loop.
//!
//! Reads `<command> [<number>]` lines, dispatches them through the
//! [`CommandRegistry`] and records every non-empty result in the
//! [`History`]. The loop is generic over its input and output so sessions
//! can be driven from memory.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::calculator::Calculator;
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::config::{DataConfig, Settings};
use crate::display::{banner, format_outcome, operations};
use crate::error::{AppError, ExportError, InputError};
use crate::export;
use crate::history::History;
use crate::log_event;

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub name: String,
    pub operand: Option<f64>,
}

/// Split a line into a lowercased command name and an optional number.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<ParsedLine>, InputError> {
    let lowered = line.trim().to_lowercase();
    let mut parts = lowered.split_whitespace();

    let Some(name) = parts.next() else {
        return Ok(None);
    };

    let operand = match parts.next() {
        None => None,
        Some(token) => match token.parse::<f64>() {
            Ok(x) if x.is_finite() => Some(x),
            _ => {
                return Err(InputError::InvalidNumber {
                    token: token.to_string(),
                });
            }
        },
    };

    if parts.next().is_some() {
        return Err(InputError::TooManyArguments);
    }

    Ok(Some(ParsedLine {
        name: name.to_string(),
        operand,
    }))
}

/// Whether the loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    pub banner: bool,
    pub color: bool,
}

impl From<&Settings> for ReplOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            prompt: settings.repl.prompt.clone(),
            banner: settings.repl.banner,
            color: settings.repl.color,
        }
    }
}

pub struct Repl<R, W> {
    registry: CommandRegistry,
    calculator: Calculator,
    history: History,
    data: DataConfig,
    history_path: PathBuf,
    options: ReplOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// REPL with every built-in command registered.
    pub fn new(settings: &Settings, input: R, output: W) -> Self {
        Self {
            registry: CommandRegistry::with_builtins(),
            calculator: Calculator::new(),
            history: History::new(),
            data: settings.data.clone(),
            history_path: settings.data.history_path(),
            options: ReplOptions::from(settings),
            input,
            output,
        }
    }

    pub fn with_options(mut self, options: ReplOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_path(&self) -> &PathBuf {
        &self.history_path
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input, then save the history.
    ///
    /// Only console failures and the exit-time save end the loop with an error.
    pub fn run(&mut self) -> Result<(), AppError> {
        if self.options.banner {
            write!(self.output, "{}", banner(self.options.color))?;
        }
        log_event!("repl", "started", "type 'exit' to exit");

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.options.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                log_event!("repl", "end of input");
                break;
            }

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        let path = self.save_history().map_err(AppError::HistorySave)?;
        writeln!(self.output, "\n📁 History saved to '{}'.", path.display())?;
        Ok(())
    }

    /// Process one input line.
    pub fn handle_line(&mut self, line: &str) -> std::io::Result<Flow> {
        let parsed = match parse_line(line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                tracing::warn!("Invalid input '{}': {e}", line.trim());
                writeln!(self.output, "❌ Error: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        match parsed.name.as_str() {
            "exit" => return Ok(Flow::Exit),
            "help" => {
                write!(self.output, "{}", operations())?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        if let Some(command) = self.registry.get(&parsed.name) {
            let arity_error = match (command.requires_operand(), parsed.operand) {
                (true, None) => Some(InputError::MissingOperand {
                    command: parsed.name.clone(),
                }),
                (false, Some(_)) => Some(InputError::UnexpectedOperand {
                    command: parsed.name.clone(),
                }),
                _ => None,
            };
            if let Some(e) = arity_error {
                tracing::warn!("Invalid command format: {e}");
                writeln!(self.output, "❌ Error: {e}")?;
                return Ok(Flow::Continue);
            }
        }

        let mut ctx = CommandContext {
            calculator: &mut self.calculator,
            history: &self.history,
            input: &mut self.input,
            output: &mut self.output,
            data: &self.data,
        };
        let outcome = self
            .registry
            .execute(&parsed.name, &mut ctx, parsed.operand);

        if let Some(outcome) = outcome {
            let label = self
                .registry
                .get(&parsed.name)
                .map_or("Result", |command| command.result_label());
            writeln!(self.output, "✅ {label}: {}", format_outcome(&outcome))?;
            self.history.record(parsed.name, parsed.operand, outcome);
        }
        Ok(Flow::Continue)
    }

    /// Write the history CSV and return its path.
    pub fn save_history(&self) -> Result<PathBuf, ExportError> {
        export::write_history(&self.history_path, &self.history)?;
        log_event!("repl", "history saved", "{}", self.history_path.display());
        Ok(self.history_path.clone())
    }
}
