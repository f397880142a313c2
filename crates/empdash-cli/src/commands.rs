use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, trace};

use empdash_common::format_numeric;
use empdash_ingest::load_table;
use empdash_model::{DashboardReport, RoleMapping};
use empdash_report::run_pipeline;
use empdash_transform::detect_roles_in_frame;

use crate::cli::{AnalyzeArgs, OutputFormatArg, RolesArgs};
use crate::logging::redact_value;
use crate::summary::{render_report, render_roles};

/// Prefix of every message for a failed load or cleaning run.
pub const PROCESSING_ERROR_CONTEXT: &str = "Error processing file";

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let report =
        run_pipeline(&args.file, &args.selection()).context(PROCESSING_ERROR_CONTEXT)?;
    log_outliers(&report);
    let rendered = format_report(&report, args.format)?;
    emit(&rendered, args.output.as_deref())
}

pub fn run_roles(args: &RolesArgs) -> Result<()> {
    let mapping = detect_file_roles(&args.file).context(PROCESSING_ERROR_CONTEXT)?;
    println!("{}", render_roles(&mapping));
    Ok(())
}

fn detect_file_roles(path: &Path) -> empdash_model::Result<RoleMapping> {
    let table = load_table(path)?;
    Ok(detect_roles_in_frame(&table))
}

/// Renders the report as terminal tables or pretty JSON.
pub fn format_report(report: &DashboardReport, format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Table => Ok(render_report(report)),
        OutputFormatArg::Json => {
            serde_json::to_string_pretty(report).context("serialize report as JSON")
        }
    }
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn log_outliers(report: &DashboardReport) {
    let Some(outliers) = &report.outliers else {
        return;
    };
    debug!(
        column = %outliers.column,
        lower_fence = outliers.lower_fence,
        upper_fence = outliers.upper_fence,
        count = outliers.count(),
        "salary outliers"
    );
    for row in &outliers.rows {
        let salary = format_numeric(row.salary);
        trace!(row = row.row, salary = redact_value(&salary), "salary outlier");
    }
}
