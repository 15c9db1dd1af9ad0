//! The `csv` command: load the sample grade sheet through a CSV file.

use std::io::Write;

use super::{Command, CommandContext, Outcome};
use crate::error::CommandResult;
use crate::export;
use crate::grades;

/// Writes the sample sheet to the grade-sheet path, reads it back and adds
/// the grades to the sample set.
#[derive(Debug, Clone, Copy)]
pub struct SampleSheetCommand;

impl Command for SampleSheetCommand {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        _operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>> {
        let path = ctx.data.grades_path();
        export::write_grades(&path, &grades::sample_sheet())?;

        let rows = export::read_grades(&path)?;
        if rows.is_empty() {
            tracing::warn!("No grades found in {}", path.display());
            writeln!(ctx.output, "⚠️ No grades found in '{}'.", path.display())?;
            return Ok(None);
        }

        ctx.calculator.extend_values(rows.iter().map(|r| r.grade));
        writeln!(ctx.output, "\n📁 Grades saved to '{}'.", path.display())?;
        writeln!(
            ctx.output,
            "📊 Added {} grades from CSV for statistical calculations. Use 'mean', 'median', 'mode', or 'standard_deviation' to analyze.",
            rows.len()
        )?;
        Ok(None)
    }
}
