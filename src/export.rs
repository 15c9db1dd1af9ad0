//! Flat CSV files: grade sheets and the operation history.
//!
//! Two schemas:
//! - grade sheet: `Category,Grade`
//! - history: `Operation,Value,Result` (empty `Value` when the command took
//!   no argument, `;`-separated `Result` for tied modes)
//!
//! Parent directories are created on write. Numbers are written unrounded.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::history::History;
use crate::log_event;

const GRADE_HEADER: [&str; 2] = ["Category", "Grade"];
const HISTORY_HEADER: [&str; 3] = ["Operation", "Value", "Result"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Grade")]
    pub grade: f64,
}

impl GradeRow {
    pub fn new(category: impl Into<String>, grade: f64) -> Self {
        Self {
            category: category.into(),
            grade,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Value")]
    pub value: Option<f64>,
    #[serde(rename = "Result")]
    pub result: String,
}

pub fn write_grades(path: &Path, rows: &[GradeRow]) -> Result<(), ExportError> {
    write_rows(path, &GRADE_HEADER, rows)?;
    log_event!(
        "export",
        "grades written",
        "{} row(s) to {}",
        rows.len(),
        path.display()
    );
    Ok(())
}

pub fn read_grades(path: &Path) -> Result<Vec<GradeRow>, ExportError> {
    read_rows(path)
}

pub fn write_history(path: &Path, history: &History) -> Result<(), ExportError> {
    let records: Vec<HistoryRecord> = history
        .entries()
        .iter()
        .map(|entry| HistoryRecord {
            operation: entry.operation.clone(),
            value: entry.value,
            result: entry.result.raw(),
        })
        .collect();

    write_rows(path, &HISTORY_HEADER, &records)?;
    log_event!(
        "export",
        "history written",
        "{} row(s) to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

pub fn read_history(path: &Path) -> Result<Vec<HistoryRecord>, ExportError> {
    read_rows(path)
}

fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            log_event!("export", "directory created", "{}", parent.display());
        }
    }

    let csv_err = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // The header is written by hand so an empty table still has one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(header).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, ExportError> {
    let csv_err = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(csv_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Outcome;
    use tempfile::TempDir;

    #[test]
    fn test_grades_round_trip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("grades.csv");

        let rows = vec![
            GradeRow::new("class1_assignment", 85.0),
            GradeRow::new("class1_project", 90.5),
            GradeRow::new("class2_midterm", 0.0),
            GradeRow::new("class2_finals", 72.25),
        ];
        write_grades(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Category,Grade\n"));

        let loaded = read_grades(&path).unwrap();
        let grades: Vec<f64> = loaded.iter().map(|r| r.grade).collect();
        assert_eq!(grades, vec![85.0, 90.5, 0.0, 72.25]);
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_history_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.csv");

        let mut history = History::new();
        history.record("add", Some(10.0), Outcome::Value(10.0));
        history.record("mean", None, Outcome::Value(10.0 / 3.0));
        history.record("mode", None, Outcome::Values(vec![5.0, 10.0]));
        write_history(&path, &history).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Operation,Value,Result"));
        assert_eq!(lines.next(), Some("add,10.0,10"));

        let records = read_history(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].value, None);
        assert_eq!(records[1].result, (10.0_f64 / 3.0).to_string());
        assert_eq!(records[2].result, "5;10");
    }

    #[test]
    fn test_empty_history_still_has_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.csv");

        write_history(&path, &History::new()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Operation,Value,Result\n"
        );
        assert!(read_history(&path).unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_target_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        // A file where a directory is expected
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = write_grades(&blocker.join("grades.csv"), &[]).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Csv { .. } | ExportError::Io { .. }
        ));
    }
}
