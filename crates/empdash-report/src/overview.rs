use polars::prelude::DataFrame;

use empdash_common::{column_cells, column_names};
use empdash_model::{ColumnMissing, DatasetOverview, Result};

/// Shape and per-column missing counts of a table.
pub fn overview(df: &DataFrame, duplicate_rows: usize) -> Result<DatasetOverview> {
    let column_names = column_names(df);
    let mut missing = Vec::with_capacity(column_names.len());
    for name in &column_names {
        let count = column_cells(df, name)?
            .iter()
            .filter(|cell| cell.is_missing())
            .count();
        missing.push(ColumnMissing {
            column: name.clone(),
            missing: count,
        });
    }
    let total_missing = missing.iter().map(|entry| entry.missing).sum();
    Ok(DatasetOverview {
        rows: df.height(),
        columns: df.width(),
        column_names,
        missing,
        total_missing,
        duplicate_rows,
    })
}
