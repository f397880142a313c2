//! Column-inference and cleaning pipeline for employee tables.
//!
//! This crate turns a freshly loaded table into a cleaned one:
//!
//! - **roles**: map logical roles to column names by keyword
//! - **numeric**: strict numeric reads for numeric roles
//! - **impute**: role-specific missing-value filling
//! - **dedupe**: exact-duplicate row removal
//! - **derive**: `Bonus` and `Experience_Level` columns
//! - **pipeline**: the all-or-nothing entry point chaining the above

pub mod dedupe;
pub mod derive;
pub mod impute;
pub mod numeric;
pub mod pipeline;
pub mod roles;

pub use dedupe::drop_duplicate_rows;
pub use derive::{BONUS_COLUMN, BONUS_RATE, EXPERIENCE_LEVEL_COLUMN, add_derived_columns};
pub use impute::{ImputationSummary, UNKNOWN_DEPARTMENT, impute_missing};
pub use numeric::numeric_values;
pub use pipeline::{CleanedDataset, clean_table};
pub use roles::{detect_roles, detect_roles_in_frame};
