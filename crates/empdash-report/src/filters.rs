//! Department and experience-level filters.

use std::collections::HashSet;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::debug;

use empdash_common::{cell_to_string, column_cells, column_names};
use empdash_model::{FilterOptions, FilterSelection, Result, Role, RoleMapping};
use empdash_transform::EXPERIENCE_LEVEL_COLUMN;

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    column_names(df).iter().any(|column| column == name)
}

/// Non-missing values of a column rendered as text, in row order.
fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    Ok(column_cells(df, name)?
        .iter()
        .map(|cell| (!cell.is_missing()).then(|| cell_to_string(cell)))
        .collect())
}

fn distinct(values: Vec<Option<String>>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    values
        .into_iter()
        .flatten()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Distinct Department and Experience_Level values in first-appearance order.
pub fn filter_options(df: &DataFrame, mapping: &RoleMapping) -> Result<FilterOptions> {
    let departments = match mapping.get(Role::Department) {
        Some(column) => distinct(text_values(df, column)?),
        None => Vec::new(),
    };
    let experience_levels = if has_column(df, EXPERIENCE_LEVEL_COLUMN) {
        distinct(text_values(df, EXPERIENCE_LEVEL_COLUMN)?)
    } else {
        Vec::new()
    };
    Ok(FilterOptions {
        departments,
        experience_levels,
    })
}

/// Keeps the rows matching every active selection.
///
/// A selection on a column that does not exist is ignored. Rows whose
/// filtered cell is missing are dropped while that selection is active.
pub fn apply_filters(
    df: &DataFrame,
    mapping: &RoleMapping,
    selection: &FilterSelection,
) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];
    let active = [
        (mapping.get(Role::Department), selection.departments.as_ref()),
        (
            Some(EXPERIENCE_LEVEL_COLUMN).filter(|column| has_column(df, column)),
            selection.experience_levels.as_ref(),
        ),
    ];
    for (column, selected) in active {
        let (Some(column), Some(selected)) = (column, selected) else {
            continue;
        };
        let selected: HashSet<&str> = selected.iter().map(String::as_str).collect();
        for (flag, value) in keep.iter_mut().zip(text_values(df, column)?) {
            *flag &= value.is_some_and(|value| selected.contains(value.as_str()));
        }
    }

    if keep.iter().all(|flag| *flag) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("selection".into(), &keep);
    let filtered = df.filter(&mask)?;
    debug!(
        before = df.height(),
        after = filtered.height(),
        "filters applied"
    );
    Ok(filtered)
}
