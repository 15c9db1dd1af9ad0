//! Running-total arithmetic.

use super::{Command, CommandContext, Outcome};
use crate::error::{CommandResult, InputError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    pub const ALL: [ArithmeticOp; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

/// Applies one operator to the running total and returns the new total.
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticCommand {
    op: ArithmeticOp,
}

impl ArithmeticCommand {
    pub fn new(op: ArithmeticOp) -> Self {
        Self { op }
    }
}

impl Command for ArithmeticCommand {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>> {
        let x = operand.ok_or_else(|| InputError::MissingOperand {
            command: self.op.name().to_string(),
        })?;

        let calc = &mut *ctx.calculator;
        let value = match self.op {
            ArithmeticOp::Add => calc.add(x),
            ArithmeticOp::Subtract => calc.subtract(x),
            ArithmeticOp::Multiply => calc.multiply(x),
            ArithmeticOp::Divide => calc.divide(x)?,
        };
        Ok(Some(Outcome::Value(value)))
    }

    fn requires_operand(&self) -> bool {
        true
    }
}
