//! Derived columns computed from resolved roles.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use empdash_model::{ExperienceLevel, Result, Role, RoleMapping};

use crate::numeric::numeric_values;

/// Bonus as a fraction of salary.
pub const BONUS_RATE: f64 = 0.10;
pub const BONUS_COLUMN: &str = "Bonus";
pub const EXPERIENCE_LEVEL_COLUMN: &str = "Experience_Level";

/// Adds `Bonus` (Salary resolved) and `Experience_Level` (Experience
/// resolved). An existing column with either name is replaced.
///
/// A missing salary gives a missing bonus and a missing experience value
/// gives a missing level; non-numeric text in either role is an error.
pub fn add_derived_columns(df: &mut DataFrame, mapping: &RoleMapping) -> Result<()> {
    if let Some(column) = mapping.get(Role::Salary) {
        let bonus: Vec<Option<f64>> = numeric_values(df, Role::Salary, column)?
            .into_iter()
            .map(|salary| salary.map(|value| value * BONUS_RATE))
            .collect();
        df.with_column(Series::new(BONUS_COLUMN.into(), bonus))?;
        debug!(source = column, "bonus column added");
    }

    if let Some(column) = mapping.get(Role::Experience) {
        let levels: Vec<Option<&str>> = numeric_values(df, Role::Experience, column)?
            .into_iter()
            .map(|years| years.map(|value| ExperienceLevel::from_years(value).as_str()))
            .collect();
        df.with_column(Series::new(EXPERIENCE_LEVEL_COLUMN.into(), levels))?;
        debug!(source = column, "experience level column added");
    }

    Ok(())
}
