//! CSV export of the movement list
//!
//! The format is deliberately minimal: no quoting, commas in descriptions are
//! replaced by spaces, and a comma inside a category is written as-is.

use std::path::Path;

use crate::error::{FinordenError, FinordenResult};
use crate::models::Movement;

/// Default file name for exported movements
pub const EXPORT_FILENAME: &str = "finorden_movimientos.csv";

const HEADER: &str = "id,type,amount,date,category,description";

/// Render movements as CSV, in list order, without a trailing newline
pub fn export_movements_csv(movements: &[Movement]) -> FinordenResult<String> {
    if movements.is_empty() {
        return Err(FinordenError::Export("No movements to export".into()));
    }

    let mut lines = Vec::with_capacity(movements.len() + 1);
    lines.push(HEADER.to_string());

    for movement in movements {
        lines.push(format!(
            "{},{},{},{},{},{}",
            movement.id,
            movement.kind,
            movement.amount.to_decimal_string(),
            movement.date,
            movement.category,
            movement.description.replace(',', " ")
        ));
    }

    Ok(lines.join("\n"))
}

/// Export movements to a CSV file, returning the number of rows written
pub fn export_to_file(movements: &[Movement], output: &Path) -> FinordenResult<usize> {
    let content = export_movements_csv(movements)?;

    std::fs::write(output, content).map_err(|e| {
        FinordenError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;

    tracing::info!(rows = movements.len(), path = %output.display(), "Exported movements");
    Ok(movements.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MovementType};
    use tempfile::TempDir;

    fn sample() -> Movement {
        Movement::with_details(
            1,
            MovementType::Income,
            Money::from_cents(85_000),
            "2024-01-01",
            "sales",
            "a, b",
        )
    }

    #[test]
    fn test_exact_output() {
        let csv = export_movements_csv(&[sample()]).unwrap();
        assert_eq!(
            csv,
            "id,type,amount,date,category,description\n1,income,850.00,2024-01-01,sales,a  b"
        );
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let err = export_movements_csv(&[]).unwrap_err();
        assert!(err.is_export());
        assert_eq!(err.to_string(), "Export error: No movements to export");
    }

    #[test]
    fn test_rows_keep_list_order() {
        let mut second = sample();
        second.id = 2;
        second.kind = MovementType::Expense;
        second.amount = Money::from_cents(5);
        second.date = "2023-12-31".into();

        let csv = export_movements_csv(&[sample(), second]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("2,expense,0.05,2023-12-31"));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(EXPORT_FILENAME);

        let rows = export_to_file(&[sample()], &path).unwrap();

        assert_eq!(rows, 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("id,type,amount"));
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("out.csv");

        assert!(export_to_file(&[sample()], &path).unwrap_err().is_export());
    }
}
