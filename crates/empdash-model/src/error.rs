//! Error taxonomy for loading, cleaning and reporting.

use std::path::PathBuf;
use thiserror::Error;

use crate::role::Role;

/// Any failure while processing one uploaded file.
///
/// Every variant is terminal for the current file: callers report the
/// message and stop, there is no partial result.
#[derive(Debug, Error)]
pub enum ProcessingError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// File extension is neither `.csv` nor `.xlsx`.
    #[error("unsupported file type: {path} (expected .csv or .xlsx)")]
    UnsupportedFormat { path: PathBuf },

    /// Text encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// CSV content could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Spreadsheet could not be opened or read.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// Spreadsheet has no worksheet.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    // === Shape Errors ===
    /// Table has no data rows.
    #[error("table is empty: {path}")]
    EmptyTable { path: PathBuf },

    // === Data Errors ===
    /// A numeric role holds a value that is not a number.
    #[error("{role} column '{column}' has non-numeric value '{value}' at row {row}")]
    NonNumeric {
        role: Role,
        column: String,
        row: usize,
        value: String,
    },

    /// Column referenced by the role mapping is absent from the table.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("data frame operation failed: {message}")]
    DataFrame { message: String },
}

#[cfg(feature = "polars")]
impl From<polars::prelude::PolarsError> for ProcessingError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ProcessingError>;
