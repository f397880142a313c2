//! Salary outliers by the interquartile-range rule.

use polars::prelude::DataFrame;
use tracing::debug;

use empdash_common::{column_cells, column_names};
use empdash_model::{CellValue, OutlierReport, OutlierRow, Result, Role, RoleMapping};
use empdash_transform::numeric_values;

/// Fence distance in multiples of the IQR.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Quantile of sorted values, interpolating linearly between the two
/// closest ranks at position `(n - 1) * q`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Rows whose salary lies outside `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`.
///
/// `None` when Salary is unresolved or has no values. Missing salaries are
/// never outliers.
pub fn salary_outliers(df: &DataFrame, mapping: &RoleMapping) -> Result<Option<OutlierReport>> {
    let Some(column) = mapping.get(Role::Salary) else {
        return Ok(None);
    };
    let salaries = numeric_values(df, Role::Salary, column)?;
    let mut sorted: Vec<f64> = salaries.iter().flatten().copied().collect();
    sorted.sort_by(f64::total_cmp);
    let (Some(q1), Some(q3)) = (quantile(&sorted, 0.25), quantile(&sorted, 0.75)) else {
        return Ok(None);
    };
    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_MULTIPLIER * iqr;
    let upper_fence = q3 + IQR_MULTIPLIER * iqr;

    let columns = column_names(df);
    let cells: Vec<Vec<CellValue>> = columns
        .iter()
        .map(|name| column_cells(df, name))
        .collect::<Result<_>>()?;
    let rows: Vec<OutlierRow> = salaries
        .iter()
        .enumerate()
        .filter_map(|(row, salary)| salary.map(|salary| (row, salary)))
        .filter(|(_, salary)| *salary < lower_fence || *salary > upper_fence)
        .map(|(row, salary)| OutlierRow {
            row,
            salary,
            values: cells.iter().map(|column| column[row].clone()).collect(),
        })
        .collect();
    debug!(column, q1, q3, outliers = rows.len(), "salary outliers computed");

    Ok(Some(OutlierReport {
        column: column.to_string(),
        q1,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        columns,
        rows,
    }))
}
