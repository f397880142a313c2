//! Post-load shape checks.

use std::path::Path;

use polars::prelude::DataFrame;

use empdash_model::{ProcessingError, Result};

/// Tables wider than this load fine but are logged as suspicious.
pub const MAX_COLUMNS_BEFORE_WARNING: usize = 500;

/// Validate DataFrame shape after loading.
///
/// Checks for:
/// - Empty DataFrame (no rows)
/// - Warns about wide datasets
pub fn validate_table_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(ProcessingError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    if df.width() > MAX_COLUMNS_BEFORE_WARNING {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than {MAX_COLUMNS_BEFORE_WARNING} columns - may impact performance"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn frame(names: &[&str], rows: usize) -> DataFrame {
        let columns: Vec<Column> = names
            .iter()
            .map(|name| Series::new((*name).into(), vec![1i64; rows]).into_column())
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn accepts_regular_table() {
        let df = frame(&["Name", "Salary"], 2);
        assert!(validate_table_shape(&df, Path::new("staff.csv")).is_ok());
    }

    #[test]
    fn rejects_empty_table() {
        let df = frame(&["Name"], 0);
        assert!(matches!(
            validate_table_shape(&df, Path::new("staff.csv")),
            Err(ProcessingError::EmptyTable { .. })
        ));
    }
}
