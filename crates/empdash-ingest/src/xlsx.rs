//! Spreadsheet reading (first worksheet only).

use std::path::Path;

use calamine::{Data, Reader, Xlsx, XlsxError, open_workbook};
use polars::prelude::DataFrame;
use tracing::debug;

use empdash_common::format_numeric;
use empdash_model::{ProcessingError, Result};

use crate::columns::frame_from_text;

/// Reads the first worksheet of an `.xlsx` file.
///
/// The first row is the header. Cells are typed per column the same way
/// CSV fields are, so both formats load a given table identically.
pub fn read_xlsx_table(path: &Path) -> Result<DataFrame> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| ProcessingError::Spreadsheet {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ProcessingError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| ProcessingError::Spreadsheet {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();
    debug!(path = %path.display(), rows = rows.len(), "worksheet read");
    if rows.is_empty() {
        return Err(ProcessingError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    frame_from_rows(&rows)
}

/// Builds a DataFrame from worksheet rows, the first being the header.
pub fn frame_from_rows(rows: &[Vec<Data>]) -> Result<DataFrame> {
    let Some((header, body)) = rows.split_first() else {
        return Ok(DataFrame::empty());
    };
    let header: Vec<Option<String>> = header.iter().map(cell_text).collect();
    let columns: Vec<Vec<Option<String>>> = (0..header.len())
        .map(|col_idx| {
            body.iter()
                .map(|row| row.get(col_idx).and_then(cell_text))
                .collect()
        })
        .collect();
    frame_from_text(&header, columns)
}

/// Cell text as it would appear in a CSV export. Error cells are missing.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(format_numeric(*v)),
        other => Some(other.to_string()),
    }
}
