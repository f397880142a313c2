//! Role detection by keyword containment in column names.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use empdash_common::column_names;
use empdash_model::{Role, RoleMapping};

/// First role whose keyword the lower-cased name contains.
fn role_for_column(name: &str) -> Option<Role> {
    let lowered = name.to_lowercase();
    Role::ALL
        .into_iter()
        .find(|role| lowered.contains(role.keyword()))
}

/// Maps roles to column names.
///
/// Columns are scanned in order and each match overwrites the previous
/// assignment for its role, so when several columns match the same keyword
/// the LAST one wins. A warning is logged whenever an earlier match gets
/// replaced.
pub fn detect_roles<S: AsRef<str>>(columns: &[S]) -> RoleMapping {
    let mut mapping = RoleMapping::new();
    for column in columns {
        let column = column.as_ref();
        let Some(role) = role_for_column(column) else {
            continue;
        };
        debug!(role = %role, column, "column matched role keyword");
        if let Some(previous) = mapping.assign(role, column) {
            warn!(
                role = %role,
                replaced = %previous,
                selected = column,
                "several columns match one role; using the last"
            );
        }
    }
    mapping
}

/// [`detect_roles`] over a DataFrame's column names.
pub fn detect_roles_in_frame(df: &DataFrame) -> RoleMapping {
    detect_roles(&column_names(df))
}
