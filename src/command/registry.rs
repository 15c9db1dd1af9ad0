//! Name to command lookup table.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexMap;

use super::{
    ArithmeticCommand, ArithmeticOp, Command, CommandContext, GradeEntryCommand, GreetCommand,
    HistoryCommand, Outcome, ResetCommand, SampleSheetCommand, Statistic, StatisticCommand,
};
use crate::debug_event;
use crate::error::DispatchError;

/// Registered commands in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in command.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        for op in ArithmeticOp::ALL {
            registry.register(op.name(), ArithmeticCommand::new(op));
        }
        for stat in Statistic::ALL {
            registry.register(stat.name(), StatisticCommand::new(stat));
        }
        registry.register("grades", GradeEntryCommand);
        registry.register("data", GradeEntryCommand);
        registry.register("greet", GreetCommand);
        registry.register("csv", SampleSheetCommand);
        registry.register("history", HistoryCommand);
        registry.register("reset", ResetCommand);

        tracing::info!(count = registry.len(), "All commands registered");
        registry
    }

    /// Bind `name` to `command`. An existing binding is replaced and returned.
    pub fn register<C>(&mut self, name: impl Into<String>, command: C) -> Option<Box<dyn Command>>
    where
        C: Command + 'static,
    {
        let name = name.into();
        let previous = self.commands.insert(name.clone(), Box::new(command));
        if previous.is_some() {
            debug_event!("registry", "rebound", "{name}");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Look up and run a command. Panics inside the command are caught and
    /// surface as [`DispatchError::Panicked`].
    pub fn dispatch(
        &self,
        name: &str,
        ctx: &mut CommandContext<'_>,
        operand: Option<f64>,
    ) -> Result<Option<Outcome>, DispatchError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;

        debug_event!("registry", "dispatch", "{name} {operand:?}");

        match panic::catch_unwind(AssertUnwindSafe(|| command.execute(ctx, operand))) {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(source)) => Err(DispatchError::Failed {
                command: name.to_string(),
                source,
            }),
            Err(_) => Err(DispatchError::Panicked {
                command: name.to_string(),
            }),
        }
    }

    /// Run a command, reporting any failure to the console and the log.
    ///
    /// Never fails: errors become `None`, so a bad command cannot stop the
    /// dispatch loop.
    pub fn execute(
        &self,
        name: &str,
        ctx: &mut CommandContext<'_>,
        operand: Option<f64>,
    ) -> Option<Outcome> {
        match self.dispatch(name, ctx, operand) {
            Ok(outcome) => outcome,
            Err(e) => {
                match &e {
                    DispatchError::UnknownCommand(_) => tracing::error!("Unknown command: {name}"),
                    DispatchError::Failed { .. } => tracing::warn!("Command '{name}' failed: {e}"),
                    DispatchError::Panicked { .. } => tracing::error!("{e}"),
                }
                if let Err(io) = writeln!(ctx.output, "❌ Error: {e}") {
                    tracing::error!("Cannot report error to console: {io}");
                }
                None
            }
        }
    }
}
