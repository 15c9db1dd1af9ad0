//! Append-only log of executed operations.

use comfy_table::{Table, presets::UTF8_FULL};

use crate::command::Outcome;
use crate::display::{format_number, format_outcome};

/// One executed command with a result.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub operation: String,
    pub value: Option<f64>,
    pub result: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: impl Into<String>, value: Option<f64>, result: Outcome) {
        self.entries.push(HistoryEntry {
            operation: operation.into(),
            value,
            result,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Table with display-rounded numbers.
    pub fn render_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["#", "Operation", "Value", "Result"]);

        for (i, entry) in self.entries.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                entry.operation.clone(),
                entry.value.map(format_number).unwrap_or_default(),
                format_outcome(&entry.result),
            ]);
        }
        table.to_string()
    }
}
