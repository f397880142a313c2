//! Strict numeric reads for numeric roles.

use polars::prelude::DataFrame;

use empdash_common::{cell_to_string, column_cells, is_na_token};
use empdash_model::{CellValue, ProcessingError, Result, Role};

/// Reads a role's column as numbers.
///
/// Missing cells, blank text and missing-value markers such as `NA` are
/// `None`. Numeric text is accepted.
/// Any other text fails with [`ProcessingError::NonNumeric`] naming the
/// 1-based data row.
pub fn numeric_values(df: &DataFrame, role: Role, column: &str) -> Result<Vec<Option<f64>>> {
    let cells = column_cells(df, column)?;
    let mut values = Vec::with_capacity(cells.len());
    for (idx, cell) in cells.iter().enumerate() {
        let value = match cell {
            CellValue::Missing => None,
            CellValue::Number(number) => Some(*number),
            CellValue::Text(text) if is_na_token(text.trim()) => None,
            CellValue::Text(_) => Some(cell.as_f64().ok_or_else(|| {
                ProcessingError::NonNumeric {
                    role,
                    column: column.to_string(),
                    row: idx + 1,
                    value: cell_to_string(cell),
                }
            })?),
        };
        values.push(value);
    }
    Ok(values)
}
