//! Commands that manage the session rather than compute.

use std::io::Write;

use super::{Command, CommandContext, Outcome};
use crate::error::CommandResult;
use crate::log_event;

pub const GREETING: &str = "Hello! This is a calculator with statistical operations.";

/// Prints a greeting with a short how-to.
#[derive(Debug, Clone, Copy)]
pub struct GreetCommand;

impl Command for GreetCommand {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        _operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>> {
        log_event!(
            "greet",
            "Welcome! You can start by entering data for 'class1' or 'class2' using the 'grades' command."
        );

        let out = &mut *ctx.output;
        writeln!(out, "{GREETING}")?;
        writeln!(out, "\n📚 Instructions:")?;
        writeln!(
            out,
            "1. Use the 'grades' command to add grades for class1 and class2."
        )?;
        writeln!(out, "2. Or use 'csv' to load the sample grade sheet.")?;
        writeln!(
            out,
            "3. After entering grades, you can calculate mean, median, mode, or standard_deviation."
        )?;
        Ok(None)
    }
}

/// Sets the running total back to 0. Collected values and history are kept.
#[derive(Debug, Clone, Copy)]
pub struct ResetCommand;

impl Command for ResetCommand {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        _operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>> {
        let value = ctx.calculator.reset();
        log_event!(
            "calculator",
            "reset",
            "{} sample(s) kept",
            ctx.calculator.values().len()
        );
        writeln!(
            ctx.output,
            "✅ Running total reset to 0. Collected values and history remain intact."
        )?;
        Ok(Some(Outcome::Value(value)))
    }
}

/// Prints the history table.
#[derive(Debug, Clone, Copy)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        _operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>> {
        if ctx.history.is_empty() {
            writeln!(ctx.output, "No operations recorded yet.")?;
        } else {
            writeln!(ctx.output, "{}", ctx.history.render_table())?;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::Session;

    #[test]
    fn test_greet_prints_greeting() {
        let mut session = Session::new();
        let result = GreetCommand.execute(&mut session.ctx(), None).unwrap();
        assert_eq!(result, None);
        let out = session.output();
        assert!(out.starts_with(GREETING));
        assert!(out.contains("'grades'"));
    }

    #[test]
    fn test_reset_returns_zero_and_keeps_samples() {
        let mut session = Session::new();
        session.calculator.add(100.0);

        let result = ResetCommand.execute(&mut session.ctx(), None).unwrap();
        assert_eq!(result, Some(Outcome::Value(0.0)));
        assert_eq!(session.calculator.value(), 0.0);
        assert_eq!(session.calculator.values(), &[100.0]);
        assert!(session.output().contains("history remain intact"));
    }

    #[test]
    fn test_history_lists_entries() {
        let mut session = Session::new();
        HistoryCommand.execute(&mut session.ctx(), None).unwrap();
        assert!(session.output().contains("No operations recorded yet."));

        session
            .history
            .record("add", Some(2.0), Outcome::Value(2.0));
        HistoryCommand.execute(&mut session.ctx(), None).unwrap();
        let out = session.output();
        assert!(out.contains("Operation"));
        assert!(out.contains("add"));
    }
}
