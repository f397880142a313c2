//! Header naming and per-column typing shared by the CSV and XLSX readers.
//!
//! Both readers hand over raw text: one optional header cell and one list
//! of optional field values per column. Typing looks at the whole column,
//! so a stray text value far down a file turns that column into text
//! instead of failing the load.

use std::collections::HashMap;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use empdash_common::is_na_token;
use empdash_model::Result;

/// Name given to a column whose header cell is blank.
fn unnamed_column(idx: usize) -> String {
    format!("Unnamed: {idx}")
}

/// Final column names for a header row.
///
/// Blank cells become `Unnamed: {idx}`. A repeated name gets a `.1`, `.2`,
/// ... suffix, skipping suffixes already taken by other columns, so
/// `Salary, Salary` loads as `Salary, Salary.1`.
pub fn header_names(raw: &[Option<String>]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());
    for (idx, cell) in raw.iter().enumerate() {
        let mut name = match cell.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => unnamed_column(idx),
        };
        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{name}.{count}");
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        names.push(name);
    }
    names
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Builds one column from raw field text.
///
/// Empty fields and missing-value markers (`NA`, `N/A`, `null`, ...) are
/// missing. The column is Float64 when every remaining value parses as a
/// number, String otherwise.
fn typed_column(name: &str, values: Vec<Option<String>>) -> Column {
    let values: Vec<Option<String>> = values
        .into_iter()
        .map(|value| value.filter(|text| !is_na_token(text)))
        .collect();
    let numbers: Option<Vec<Option<f64>>> = values
        .iter()
        .map(|value| match value {
            Some(text) => parse_number(text).map(Some),
            None => Some(None),
        })
        .collect();
    match numbers {
        Some(numbers) => Series::new(name.into(), numbers).into_column(),
        None => Series::new(name.into(), values).into_column(),
    }
}

/// Assembles a DataFrame from a header row and one value list per column.
///
/// Columns shorter than the longest one are padded with missing values.
pub fn frame_from_text(
    header: &[Option<String>],
    mut columns: Vec<Vec<Option<String>>>,
) -> Result<DataFrame> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    columns.resize_with(header.len(), Vec::new);
    let frame_columns: Vec<Column> = header_names(header)
        .iter()
        .zip(columns)
        .map(|(name, mut values)| {
            values.resize(height, None);
            typed_column(name, values)
        })
        .collect();
    Ok(DataFrame::new(frame_columns)?)
}
