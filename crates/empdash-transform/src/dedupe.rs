use std::collections::BTreeSet;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use empdash_common::{column_cells, column_names};
use empdash_model::{CellValue, Result};

/// Removes rows that exactly duplicate an earlier row across all columns.
///
/// Missing equals missing for this comparison. The first occurrence of each
/// row is kept and survivor order is unchanged. Returns the number of rows
/// removed.
pub fn drop_duplicate_rows(df: &mut DataFrame) -> Result<usize> {
    if df.height() == 0 {
        return Ok(0);
    }
    let columns: Vec<Vec<CellValue>> = column_names(df)
        .iter()
        .map(|name| column_cells(df, name))
        .collect::<Result<_>>()?;

    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let composite: Vec<String> = columns
            .iter()
            .map(|cells| cells[idx].dedupe_key())
            .collect();
        keep.push(seen.insert(composite));
    }

    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
        *df = df.filter(&mask)?;
    }
    Ok(removed)
}
