//! Loading uploaded employee files into Polars DataFrames.
//!
//! - **format**: file type detection from the extension
//! - **columns**: header naming and per-column typing shared by both readers
//! - **csv**: CSV reading through the Polars CSV reader
//! - **xlsx**: first-worksheet reading through `calamine`
//! - **shape**: post-load checks shared by both readers

pub mod columns;
pub mod csv;
pub mod format;
pub mod shape;
pub mod xlsx;

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use empdash_model::{ProcessingError, Result};

pub use columns::{frame_from_text, header_names};
pub use csv::{read_csv_table, validate_encoding};
pub use format::FileFormat;
pub use shape::{MAX_COLUMNS_BEFORE_WARNING, validate_table_shape};
pub use xlsx::{frame_from_rows, read_xlsx_table};

/// Loads a `.csv` or `.xlsx` file and validates its shape.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(ProcessingError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = FileFormat::from_path(path)?;
    let df = match format {
        FileFormat::Csv => read_csv_table(path)?,
        FileFormat::Xlsx => read_xlsx_table(path)?,
    };
    validate_table_shape(&df, path)?;
    info!(
        path = %path.display(),
        format = %format,
        rows = df.height(),
        columns = df.width(),
        "file loaded"
    );
    Ok(df)
}
