//! Dashboard statistics for cleaned employee tables.
//!
//! - **overview**: shape and missing-value counts
//! - **outliers**: salary outliers by the IQR rule
//! - **filters**: department and experience-level selection
//! - **charts**: bar, pie, histogram and scatter datasets

pub mod charts;
pub mod filters;
pub mod outliers;
pub mod overview;

use std::path::Path;

use tracing::{info, info_span};

use empdash_ingest::load_table;
use empdash_model::{DashboardReport, FilterSelection, Result};
use empdash_transform::{CleanedDataset, clean_table};

pub use charts::{
    AGE_HISTOGRAM_BINS, age_histogram, chart_data, experience_distribution, histogram_bins,
    salary_by_department, salary_vs_performance,
};
pub use filters::{apply_filters, filter_options};
pub use outliers::{IQR_MULTIPLIER, quantile, salary_outliers};
pub use overview::overview;

/// Builds the dashboard report for a cleaned dataset.
///
/// Overview, outliers and filter options describe the whole cleaned table;
/// charts are computed on the rows left by `selection`.
pub fn build_report(
    dataset: &CleanedDataset,
    selection: &FilterSelection,
) -> Result<DashboardReport> {
    let table = &dataset.table;
    let roles = &dataset.roles;
    let filtered = apply_filters(table, roles, selection)?;
    let report = DashboardReport {
        roles: roles.clone(),
        overview: overview(table, dataset.duplicate_rows)?,
        outliers: salary_outliers(table, roles)?,
        filters: filter_options(table, roles)?,
        selection: selection.clone(),
        filtered_rows: filtered.height(),
        charts: chart_data(&filtered, roles)?,
    };
    info!(
        rows = report.overview.rows,
        filtered_rows = report.filtered_rows,
        outliers = report.outliers.as_ref().map_or(0, |outliers| outliers.count()),
        "report built"
    );
    Ok(report)
}

/// Loads, cleans and reports on one file. The first failure aborts the run.
pub fn run_pipeline(path: &Path, selection: &FilterSelection) -> Result<DashboardReport> {
    let span = info_span!("pipeline", path = %path.display());
    let _guard = span.enter();
    let table = load_table(path)?;
    let dataset = clean_table(table)?;
    build_report(&dataset, selection)
}
