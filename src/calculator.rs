//! Running-total calculator with an ordered sample set.

use crate::error::CalcError;
use crate::stats::{self, Mode};

/// Accumulator state shared by every command.
///
/// `value` is the running total, starting at 0. `values` is the sample set
/// used for statistics: every operand passed to [`Calculator::add`] and every
/// grade inserted with [`Calculator::add_value`], in entry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    value: f64,
    values: Vec<f64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current running total.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sample set in entry order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn add(&mut self, x: f64) -> f64 {
        self.value += x;
        self.values.push(x);
        self.value
    }

    pub fn subtract(&mut self, x: f64) -> f64 {
        self.value -= x;
        self.value
    }

    pub fn multiply(&mut self, x: f64) -> f64 {
        self.value *= x;
        self.value
    }

    /// Divide the running total. Leaves it untouched when `x` is zero.
    pub fn divide(&mut self, x: f64) -> Result<f64, CalcError> {
        if x == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        self.value /= x;
        Ok(self.value)
    }

    /// Reset the running total to 0. The sample set is kept.
    pub fn reset(&mut self) -> f64 {
        self.value = 0.0;
        self.value
    }

    /// Record a statistical sample without touching the running total.
    pub fn add_value(&mut self, x: f64) {
        self.values.push(x);
    }

    pub fn extend_values(&mut self, xs: impl IntoIterator<Item = f64>) {
        self.values.extend(xs);
    }

    pub fn mean(&self) -> Result<f64, CalcError> {
        stats::mean(&self.values).ok_or(empty("mean"))
    }

    pub fn median(&self) -> Result<f64, CalcError> {
        stats::median(&self.values).ok_or(empty("median"))
    }

    pub fn mode(&self) -> Result<Mode, CalcError> {
        stats::mode(&self.values).ok_or(empty("mode"))
    }

    pub fn standard_deviation(&self) -> Result<f64, CalcError> {
        stats::population_std_dev(&self.values).ok_or(empty("standard deviation"))
    }
}

fn empty(statistic: &'static str) -> CalcError {
    CalcError::EmptyDataset { statistic }
}
