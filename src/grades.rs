//! Grade collection: interactive prompts and the built-in sample sheet.

use std::io::{self, BufRead, Write};

use crate::export::GradeRow;

pub const CLASSES: [&str; 2] = ["class1", "class2"];
pub const CATEGORIES: [&str; 4] = ["assignment", "project", "midterm", "finals"];

/// Grades used by the `csv` command, in class/category order.
const SAMPLE_GRADES: [f64; 8] = [85.0, 90.0, 78.0, 88.0, 82.0, 89.0, 76.0, 92.0];

/// Result of parsing one line typed at a grade prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeInput {
    Grade(f64),
    /// Blank line: leave this category out
    Skip,
    Invalid(&'static str),
}

pub fn parse_grade(line: &str) -> GradeInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return GradeInput::Skip;
    }
    match trimmed.parse::<f64>() {
        Ok(g) if !g.is_finite() => GradeInput::Invalid("Please enter a valid number."),
        Ok(g) if g < 0.0 => GradeInput::Invalid("Grades cannot be negative."),
        Ok(g) => GradeInput::Grade(g),
        Err(_) => GradeInput::Invalid("Please enter a valid number."),
    }
}

/// Categories are stored as `<class>_<category>`.
pub fn category_key(class: &str, category: &str) -> String {
    format!("{class}_{category}")
}

/// Prompt for one grade per category per class.
///
/// Invalid entries re-prompt; blank entries are skipped. End of input stops
/// collection and returns what was gathered so far.
pub fn collect_grades(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> io::Result<Vec<GradeRow>> {
    let mut rows = Vec::new();
    let mut line = String::new();

    writeln!(
        output,
        "\n📊 Enter grades for each category and class (blank to skip)."
    )?;

    for class in CLASSES {
        writeln!(output, "\n📚 Entering grades for {class}:")?;

        for category in CATEGORIES {
            loop {
                write!(output, "Enter {category} grade: ")?;
                output.flush()?;

                line.clear();
                if input.read_line(&mut line)? == 0 {
                    writeln!(output)?;
                    tracing::warn!(
                        "Input ended during grade entry; keeping {} grade(s)",
                        rows.len()
                    );
                    return Ok(rows);
                }

                match parse_grade(&line) {
                    GradeInput::Grade(grade) => {
                        let key = category_key(class, category);
                        rows.push(GradeRow::new(key, grade));
                        break;
                    }
                    GradeInput::Skip => break,
                    GradeInput::Invalid(reason) => writeln!(output, "❌ Error: {reason}")?,
                }
            }
        }
    }

    Ok(rows)
}

fn class_keys(class: &str) -> [String; CATEGORIES.len()] {
    CATEGORIES.map(|category| category_key(class, category))
}

/// Fixed sample sheet covering every class and category.
pub fn sample_sheet() -> Vec<GradeRow> {
    CLASSES
        .into_iter()
        .flat_map(class_keys)
        .zip(SAMPLE_GRADES)
        .map(|(category, grade)| GradeRow::new(category, grade))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> (Vec<GradeRow>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let rows = collect_grades(&mut reader, &mut out).unwrap();
        (rows, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("88.5\n"), GradeInput::Grade(88.5));
        assert_eq!(parse_grade("0"), GradeInput::Grade(0.0));
        assert_eq!(parse_grade("   \n"), GradeInput::Skip);
        assert_eq!(
            parse_grade("-5"),
            GradeInput::Invalid("Grades cannot be negative.")
        );
        assert!(matches!(parse_grade("abc"), GradeInput::Invalid(_)));
        assert!(matches!(parse_grade("inf"), GradeInput::Invalid(_)));
    }

    #[test]
    fn test_collect_all_categories() {
        let (rows, out) = collect("85\n90\n78\n88\n82\n89\n76\n92\n");
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], GradeRow::new("class1_assignment", 85.0));
        assert_eq!(rows[7], GradeRow::new("class2_finals", 92.0));
        assert!(out.contains("Entering grades for class2"));
    }

    #[test]
    fn test_collect_reprompts_and_skips() {
        // bad number, negative, then valid; blank skips project
        let (rows, out) = collect("x\n-1\n70\n\n60\n50\n\n\n\n\n");
        let grades: Vec<f64> = rows.iter().map(|r| r.grade).collect();
        assert_eq!(grades, vec![70.0, 60.0, 50.0]);
        assert_eq!(rows[1].category, "class1_midterm");
        assert!(out.contains("❌ Error: Please enter a valid number."));
        assert!(out.contains("❌ Error: Grades cannot be negative."));
    }

    #[test]
    fn test_collect_stops_at_end_of_input() {
        let (rows, _) = collect("100\n95\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_sample_sheet() {
        let sheet = sample_sheet();
        assert_eq!(sheet.len(), 8);
        assert_eq!(sheet[0], GradeRow::new("class1_assignment", 85.0));
        assert_eq!(sheet[3], GradeRow::new("class1_finals", 88.0));
        assert_eq!(sheet[7], GradeRow::new("class2_finals", 92.0));
    }
}
