//! Role-specific missing-value imputation.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use empdash_common::{cell_to_string, column_cells};
use empdash_model::{CellValue, Result, Role, RoleMapping};

use crate::numeric::numeric_values;

/// Fill value for missing departments.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// What imputation changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImputationSummary {
    /// Mean used for missing salaries, when one could be computed.
    pub salary_mean: Option<f64>,
    pub salaries_filled: usize,
    pub departments_filled: usize,
}

fn mean(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Fills missing Salary cells with the column mean and missing Department
/// cells with `"Unknown"`. Other columns are untouched.
///
/// The mean is taken over the original non-missing salaries. If every
/// salary is missing there is no mean and the column stays missing. The
/// Salary column is rewritten as Float64; the Department column is
/// rewritten as text only when it had gaps.
pub fn impute_missing(df: &mut DataFrame, mapping: &RoleMapping) -> Result<ImputationSummary> {
    let mut summary = ImputationSummary::default();

    if let Some(column) = mapping.get(Role::Salary) {
        let values = numeric_values(df, Role::Salary, column)?;
        summary.salary_mean = mean(&values);
        let filled: Vec<Option<f64>> = values
            .iter()
            .map(|value| value.or(summary.salary_mean))
            .collect();
        summary.salaries_filled = values
            .iter()
            .zip(&filled)
            .filter(|(before, after)| before.is_none() && after.is_some())
            .count();
        df.with_column(Series::new(column.into(), filled))?;
        debug!(
            column,
            filled = summary.salaries_filled,
            mean = ?summary.salary_mean,
            "salary gaps filled"
        );
    }

    if let Some(column) = mapping.get(Role::Department) {
        let cells = column_cells(df, column)?;
        summary.departments_filled = cells.iter().filter(|cell| cell.is_missing()).count();
        if summary.departments_filled > 0 {
            let filled: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    CellValue::Missing => UNKNOWN_DEPARTMENT.to_string(),
                    other => cell_to_string(other),
                })
                .collect();
            df.with_column(Series::new(column.into(), filled))?;
        }
        debug!(
            column,
            filled = summary.departments_filled,
            "department gaps filled"
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use empdash_common::cell_at;
    use polars::prelude::{Column, IntoColumn};

    fn frame(columns: Vec<Column>) -> DataFrame {
        DataFrame::new(columns).unwrap()
    }

    fn mapping(salary: Option<&str>, department: Option<&str>) -> RoleMapping {
        RoleMapping {
            salary: salary.map(String::from),
            department: department.map(String::from),
            ..RoleMapping::default()
        }
    }

    #[test]
    fn salary_gaps_take_the_original_mean() {
        let mut df = frame(vec![
            Series::new("Salary".into(), vec![Some(100.0), None, Some(300.0), None]).into_column(),
        ]);

        let summary = impute_missing(&mut df, &mapping(Some("Salary"), None)).unwrap();

        assert_eq!(summary.salary_mean, Some(200.0));
        assert_eq!(summary.salaries_filled, 2);
        for idx in 0..4 {
            assert!(!cell_at(&df, "Salary", idx).is_missing());
        }
        assert_eq!(cell_at(&df, "Salary", 1), CellValue::Number(200.0));
        assert_eq!(cell_at(&df, "Salary", 3), CellValue::Number(200.0));
    }

    #[test]
    fn integer_salaries_are_widened() {
        let mut df = frame(vec![
            Series::new("Pay Salary".into(), vec![Some(1i64), Some(2), None]).into_column(),
        ]);

        impute_missing(&mut df, &mapping(Some("Pay Salary"), None)).unwrap();

        assert_eq!(cell_at(&df, "Pay Salary", 2), CellValue::Number(1.5));
    }

    #[test]
    fn all_missing_salaries_stay_missing() {
        let mut df = frame(vec![
            Series::new("Salary".into(), vec![None::<f64>, None]).into_column(),
        ]);

        let summary = impute_missing(&mut df, &mapping(Some("Salary"), None)).unwrap();

        assert_eq!(summary.salary_mean, None);
        assert_eq!(summary.salaries_filled, 0);
        assert!(cell_at(&df, "Salary", 0).is_missing());
    }

    #[test]
    fn departments_become_unknown() {
        let mut df = frame(vec![
            Series::new("Department".into(), vec![Some("IT"), None]).into_column(),
        ]);

        let summary = impute_missing(&mut df, &mapping(None, Some("Department"))).unwrap();

        assert_eq!(summary.departments_filled, 1);
        assert_eq!(
            cell_at(&df, "Department", 1),
            CellValue::Text(UNKNOWN_DEPARTMENT.to_string())
        );
    }

    #[test]
    fn other_columns_keep_their_gaps() {
        let mut df = frame(vec![
            Series::new("Salary".into(), vec![Some(1.0), None]).into_column(),
            Series::new("Age".into(), vec![Some(30.0), None]).into_column(),
        ]);

        impute_missing(&mut df, &mapping(Some("Salary"), None)).unwrap();

        assert!(cell_at(&df, "Age", 1).is_missing());
    }
}
