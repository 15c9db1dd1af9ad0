//! Presentation helpers: number formatting and the REPL banner.
//!
//! Rounding to two decimals happens here and only here. Values held by the
//! calculator and written to CSV stay unrounded.

use console::style;

use crate::command::Outcome;

/// Round to two decimals and trim trailing zeros: `10`, `2.5`, `14.14`.
pub fn format_number(x: f64) -> String {
    // Scaling by 100 would overflow; no fractional digits are left at this size
    if !x.is_finite() || x.abs() > f64::MAX / 100.0 {
        return x.to_string();
    }
    // Adding 0.0 folds -0.0 into 0.0
    let rounded = (x * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}

pub fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// Display form of a command result.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Value(v) => format_number(*v),
        Outcome::Values(vs) => format_list(vs),
    }
}

/// Welcome text listing every operation.
pub fn banner(color: bool) -> String {
    let heading = |text: &str| {
        if color {
            style(text).cyan().bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut text = String::new();
    text.push_str(&format!(
        "\n{}\n\n",
        heading("🔢 Welcome to the Calculator REPL!")
    ));
    text.push_str(&format!("{}\n", heading("📚 Available Operations:")));
    text.push_str(&operations());
    text.push_str(
        "\nℹ️ Type 'exit' to quit and save the history at any time.\n",
    );
    text
}

/// One line per REPL command.
pub fn operations() -> String {
    [
        "add <value>: Adds a value to the current total (e.g., 'add 5').",
        "subtract <value>: Subtracts a value from the current total (e.g., 'subtract 3').",
        "multiply <value>: Multiplies the current total by a value (e.g., 'multiply 4').",
        "divide <value>: Divides the current total by a value (e.g., 'divide 2').",
        "mean: Calculates the mean of entered values.",
        "median: Calculates the median of entered values.",
        "mode: Calculates the mode of entered values.",
        "standard_deviation: Calculates the population standard deviation of entered values.",
        "grades (or data): Enter grades for each category of class1 and class2.",
        "greet: Displays a greeting message.",
        "csv: Writes the sample grade sheet to CSV and loads it for statistics.",
        "history: Shows every recorded operation.",
        "reset: Resets the running total to 0 (collected values and history remain).",
        "help: Shows this list again.",
        "exit: Saves the history to CSV and exits.",
    ]
    .iter()
    .map(|line| format!("  - {line}\n"))
    .collect()
}
