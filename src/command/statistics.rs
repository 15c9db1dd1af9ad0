//! Statistics over the calculator's sample set.

use super::{Command, CommandContext, Outcome};
use crate::error::CommandResult;
use crate::stats::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    Mode,
    StandardDeviation,
}

impl Statistic {
    pub const ALL: [Statistic; 4] = [
        Self::Mean,
        Self::Median,
        Self::Mode,
        Self::StandardDeviation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::StandardDeviation => "standard_deviation",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StatisticCommand {
    stat: Statistic,
}

impl StatisticCommand {
    pub fn new(stat: Statistic) -> Self {
        Self { stat }
    }
}

impl Command for StatisticCommand {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        _operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>> {
        let calc = &*ctx.calculator;
        let outcome = match self.stat {
            Statistic::Mean => Outcome::Value(calc.mean()?),
            Statistic::Median => Outcome::Value(calc.median()?),
            Statistic::StandardDeviation => Outcome::Value(calc.standard_deviation()?),
            Statistic::Mode => match calc.mode()? {
                Mode::Unique(v) => Outcome::Value(v),
                Mode::Tied(vs) => Outcome::Values(vs),
            },
        };
        Ok(Some(outcome))
    }

    fn result_label(&self) -> &'static str {
        match self.stat {
            Statistic::Mean => "The mean of the collected values is",
            _ => "Result",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::Session;
    use crate::display::format_outcome;
    use crate::error::{CalcError, CommandError};

    fn run(values: &[f64], stat: Statistic) -> CommandResult<Option<Outcome>> {
        let mut session = Session::new();
        session.calculator.extend_values(values.iter().copied());
        StatisticCommand::new(stat).execute(&mut session.ctx(), None)
    }

    #[test]
    fn test_mean_and_median() {
        assert_eq!(
            run(&[3.0, 4.0, 5.0], Statistic::Mean).unwrap(),
            Some(Outcome::Value(4.0))
        );
        assert_eq!(
            run(&[3.0, 4.0, 5.0], Statistic::Median).unwrap(),
            Some(Outcome::Value(4.0))
        );
        assert_eq!(
            run(&[10.0, 20.0, 30.0, 40.0], Statistic::Median).unwrap(),
            Some(Outcome::Value(25.0))
        );
    }

    #[test]
    fn test_mode_scalar_or_sorted_list() {
        assert_eq!(
            run(&[5.0, 5.0, 10.0, 10.0, 20.0], Statistic::Mode).unwrap(),
            Some(Outcome::Values(vec![5.0, 10.0]))
        );
        assert_eq!(
            run(&[1.0, 3.0, 3.0], Statistic::Mode).unwrap(),
            Some(Outcome::Value(3.0))
        );
    }

    #[test]
    fn test_standard_deviation_display() {
        let samples = [10.0, 20.0, 30.0, 40.0, 50.0];
        let outcome = run(&samples, Statistic::StandardDeviation).unwrap().unwrap();
        assert_eq!(format_outcome(&outcome), "14.14");
        // Returned value is not rounded
        assert_eq!(outcome, Outcome::Value(200.0_f64.sqrt()));
    }

    #[test]
    fn test_only_mean_has_its_own_label() {
        let mean = StatisticCommand::new(Statistic::Mean);
        assert_eq!(mean.result_label(), "The mean of the collected values is");
        let median = StatisticCommand::new(Statistic::Median);
        assert_eq!(median.result_label(), "Result");
    }

    #[test]
    fn test_empty_sample_set() {
        for stat in Statistic::ALL {
            let err = run(&[], stat).unwrap_err();
            assert!(
                matches!(err, CommandError::Calc(CalcError::EmptyDataset { .. })),
                "{stat:?} should fail on an empty set"
            );
        }
    }
}
