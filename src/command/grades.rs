//! Interactive grade entry.

use std::io::Write;

use super::{Command, CommandContext, Outcome};
use crate::display::format_list;
use crate::error::CommandResult;
use crate::export;
use crate::grades::{self, CLASSES};
use crate::log_event;

/// Prompts for grades, adds them to the sample set and writes the grade sheet.
#[derive(Debug, Clone, Copy)]
pub struct GradeEntryCommand;

impl Command for GradeEntryCommand {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        _operand: Option<f64>,
    ) -> CommandResult<Option<Outcome>> {
        let rows = grades::collect_grades(&mut *ctx.input, &mut *ctx.output)?;
        if rows.is_empty() {
            writeln!(ctx.output, "⚠️ No grades entered.")?;
            return Ok(None);
        }

        // Sample set only grows once the sheet is saved
        let path = ctx.data.grades_path();
        export::write_grades(&path, &rows)?;

        let collected: Vec<f64> = rows.iter().map(|r| r.grade).collect();
        ctx.calculator.extend_values(collected.iter().copied());
        log_event!("grades", "collected", "{collected:?}");

        writeln!(
            ctx.output,
            "\n✅ Grades collected:\nList: {}",
            format_list(&collected)
        )?;
        for class in CLASSES {
            let prefix = format!("{class}_");
            let by_class: Vec<f64> = rows
                .iter()
                .filter(|r| r.category.starts_with(&prefix))
                .map(|r| r.grade)
                .collect();
            writeln!(ctx.output, "{class}: {}", format_list(&by_class))?;
        }
        writeln!(ctx.output, "\n📁 Grades saved to '{}'.", path.display())?;
        writeln!(
            ctx.output,
            "\n📊 You can now use 'mean', 'median', 'mode', or 'standard_deviation' on the collected grades."
        )?;
        Ok(None)
    }
}
