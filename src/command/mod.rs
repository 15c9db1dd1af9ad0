//! Named operations executed against the calculator.
//!
//! Every operation implements [`Command`] and is looked up by name through
//! [`CommandRegistry`]. Commands receive a [`CommandContext`] borrowing the
//! session state for the duration of one call; the calculator, not the
//! command object, holds anything that outlives `execute`.

pub mod arithmetic;
pub mod grades;
pub mod registry;
pub mod sample_sheet;
pub mod session;
pub mod statistics;

use std::io::{BufRead, Write};

use crate::calculator::Calculator;
use crate::config::DataConfig;
use crate::error::CommandResult;
use crate::history::History;

pub use arithmetic::{ArithmeticCommand, ArithmeticOp};
pub use grades::GradeEntryCommand;
pub use registry::CommandRegistry;
pub use sample_sheet::SampleSheetCommand;
pub use session::{GreetCommand, HistoryCommand, ResetCommand};
pub use statistics::{Statistic, StatisticCommand};

/// Result value of a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    /// Several values, e.g. tied modes
    Values(Vec<f64>),
}

impl Outcome {
    /// Unrounded text form used in CSV output. Lists are `;`-separated.
    pub fn raw(&self) -> String {
        match self {
            Outcome::Value(v) => v.to_string(),
            Outcome::Values(vs) => {
                let parts: Vec<String> = vs.iter().map(f64::to_string).collect();
                parts.join(";")
            }
        }
    }
}

/// Session state lent to a command for one execution.
pub struct CommandContext<'a> {
    pub calculator: &'a mut Calculator,
    pub history: &'a History,
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
    pub data: &'a DataConfig,
}

/// An operation dispatched by name.
pub trait Command {
    /// Run the command. `Ok(None)` means the command only had side effects
    /// and nothing is recorded in the history.
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>>;

    /// Whether the REPL must supply a numeric argument.
    fn requires_operand(&self) -> bool {
        false
    }

    /// Text printed before a result, as in `✅ Result: 10`.
    fn result_label(&self) -> &'static str {
        "Result"
    }
}
