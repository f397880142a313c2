//! Report types consumed by renderers.
//!
//! Everything here is plain data: the report crate fills it in, the CLI
//! prints it or serializes it to JSON for an external charting layer.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::role::RoleMapping;

/// Missing-value count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMissing {
    pub column: String,
    pub missing: usize,
}

/// Shape and completeness of the cleaned table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub missing: Vec<ColumnMissing>,
    pub total_missing: usize,
    /// Rows removed as exact duplicates before cleaning finished.
    pub duplicate_rows: usize,
}

impl DatasetOverview {
    pub fn has_missing(&self) -> bool {
        self.total_missing > 0
    }
}

/// One row flagged by the IQR rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierRow {
    /// Zero-based position in the cleaned table.
    pub row: usize,
    pub salary: f64,
    /// Cells aligned with [`OutlierReport::columns`].
    pub values: Vec<CellValue>,
}

/// Salary outliers by the 1.5 x IQR rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub column: String,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub columns: Vec<String>,
    pub rows: Vec<OutlierRow>,
}

impl OutlierReport {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Distinct values offered by the dashboard filters, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub experience_levels: Vec<String>,
}

/// Values selected in the dashboard filters.
///
/// `None` means no filtering on that column (every value selected).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub departments: Option<Vec<String>>,
    pub experience_levels: Option<Vec<String>>,
}

impl FilterSelection {
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_departments(mut self, departments: Vec<String>) -> Self {
        self.departments = Some(departments);
        self
    }

    #[must_use]
    pub fn with_experience_levels(mut self, levels: Vec<String>) -> Self {
        self.experience_levels = Some(levels);
        self
    }

    pub fn is_all(&self) -> bool {
        self.departments.is_none() && self.experience_levels.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalary {
    pub department: String,
    pub mean_salary: f64,
    pub employees: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelShare {
    pub level: String,
    pub count: usize,
    pub percent: f64,
}

/// Half-open bin `[lower, upper)`; the last bin also includes `upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeHistogram {
    pub column: String,
    pub bins: Vec<AgeBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPerformancePoint {
    pub salary: f64,
    pub performance: f64,
}

/// Chart datasets; a chart is `None` when the roles it needs are unresolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub salary_by_department: Option<Vec<DepartmentSalary>>,
    pub experience_distribution: Option<Vec<LevelShare>>,
    pub age_histogram: Option<AgeHistogram>,
    pub salary_vs_performance: Option<Vec<SalaryPerformancePoint>>,
}

/// Everything the dashboard shows for one uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub roles: RoleMapping,
    pub overview: DatasetOverview,
    pub outliers: Option<OutlierReport>,
    pub filters: FilterOptions,
    pub selection: FilterSelection,
    /// Rows left after applying `selection`; charts are computed on these.
    pub filtered_rows: usize,
    pub charts: ChartData,
}
