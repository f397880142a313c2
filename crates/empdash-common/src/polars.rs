//! Polars AnyValue utility functions.
//!
//! This module converts Polars `AnyValue` types into [`CellValue`]s and
//! strings, and reads whole columns out of a `DataFrame`.

use polars::prelude::{AnyValue, DataFrame};

use empdash_model::{CellValue, ProcessingError, Result};

/// Converts a Polars `AnyValue` into a tagged [`CellValue`].
///
/// Nulls and NaN floats are missing; every numeric type becomes a number;
/// strings stay text (an empty string is still text, not missing).
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use empdash_common::any_to_cell;
/// use empdash_model::CellValue;
///
/// assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
/// assert_eq!(any_to_cell(AnyValue::Int32(42)), CellValue::Number(42.0));
/// assert_eq!(any_to_cell(AnyValue::String("IT")), CellValue::Text("IT".to_string()));
/// ```
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::Float32(v) if v.is_nan() => CellValue::Missing,
        AnyValue::Float64(v) if v.is_nan() => CellValue::Missing,
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        AnyValue::Boolean(b) => CellValue::Text(b.to_string()),
        other => match numeric_value(&other) {
            Some(number) => CellValue::Number(number),
            None => CellValue::Text(other.to_string()),
        },
    }
}

fn numeric_value(value: &AnyValue<'_>) -> Option<f64> {
    match *value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        _ => None,
    }
}

/// Renders a cell for display; missing cells render as an empty string.
pub fn cell_to_string(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(number) => format_numeric(*number),
        CellValue::Text(text) => text.clone(),
        CellValue::Missing => String::new(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use empdash_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Column names in table order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Reads every cell of a column.
pub fn column_cells(df: &DataFrame, name: &str) -> Result<Vec<CellValue>> {
    let column = df
        .column(name)
        .map_err(|_| ProcessingError::ColumnNotFound {
            column: name.to_string(),
        })?;
    let mut cells = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        cells.push(any_to_cell(column.get(idx)?));
    }
    Ok(cells)
}

/// Reads a single cell; out-of-range rows and unknown columns are missing.
pub fn cell_at(df: &DataFrame, name: &str, idx: usize) -> CellValue {
    match df.column(name) {
        Ok(column) => any_to_cell(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => CellValue::Missing,
    }
}
