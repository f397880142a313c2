//! All-or-nothing cleaning entry point.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use empdash_model::{Result, RoleMapping};

use crate::dedupe::drop_duplicate_rows;
use crate::derive::add_derived_columns;
use crate::impute::{ImputationSummary, impute_missing};
use crate::roles::detect_roles_in_frame;

/// A cleaned table together with what cleaning found.
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    pub table: DataFrame,
    pub roles: RoleMapping,
    /// Rows removed as exact duplicates.
    pub duplicate_rows: usize,
    pub imputation: ImputationSummary,
}

/// Detects roles, imputes gaps, drops duplicate rows and adds derived
/// columns, in that order. The first failure aborts the run.
pub fn clean_table(mut table: DataFrame) -> Result<CleanedDataset> {
    let span = info_span!("clean", rows = table.height(), columns = table.width());
    let _guard = span.enter();
    let start = Instant::now();

    let roles = detect_roles_in_frame(&table);
    let imputation = impute_missing(&mut table, &roles)?;
    let duplicate_rows = drop_duplicate_rows(&mut table)?;
    add_derived_columns(&mut table, &roles)?;

    info!(
        roles = roles.len(),
        salaries_filled = imputation.salaries_filled,
        departments_filled = imputation.departments_filled,
        duplicate_rows,
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "table cleaned"
    );

    Ok(CleanedDataset {
        table,
        roles,
        duplicate_rows,
        imputation,
    })
}
