//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use empdash_model::{ProcessingError, Result};

use crate::columns::frame_from_text;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProcessingError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProcessingError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Returns the number of bytes read from the start of the file so callers
/// can tell an empty file apart from one with content.
pub fn validate_encoding(path: &Path) -> Result<usize> {
    let mut file = open(path)?;
    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| ProcessingError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(ProcessingError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(ProcessingError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable; it is stripped from the first header.
    Ok(bytes_read)
}

fn parse_error(path: &Path, e: impl ToString) -> ProcessingError {
    ProcessingError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Every field is read as text first and each column is typed over all of
/// its rows afterwards. Empty fields and missing-value markers are nulls.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    if validate_encoding(path)? == 0 {
        return Err(ProcessingError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let raw = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| parse_error(path, e))?
        .finish()
        .map_err(|e| parse_error(path, e))?;

    let mut header = Vec::with_capacity(raw.width());
    let mut columns = Vec::with_capacity(raw.width());
    for column in raw.get_columns() {
        let mut fields = column
            .str()
            .map_err(|e| parse_error(path, e))?
            .into_iter()
            .map(|field| field.map(str::to_string));
        header.push(fields.next().flatten());
        columns.push(fields.collect::<Vec<_>>());
    }
    if let Some(Some(first)) = header.first_mut()
        && first.starts_with('\u{feff}')
    {
        first.remove(0);
    }

    frame_from_text(&header, columns)
}
