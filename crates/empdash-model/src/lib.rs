//! Data model for the employee dashboard pipeline.
//!
//! - **role**: logical column roles and the detected [`RoleMapping`]
//! - **cell**: tagged cell values read out of a loaded table
//! - **experience**: seniority bands derived from years of experience
//! - **report**: overview, outlier and chart types handed to renderers
//! - **error**: the [`ProcessingError`] taxonomy shared by every stage

pub mod cell;
pub mod error;
pub mod experience;
pub mod report;
pub mod role;

pub use cell::CellValue;
pub use error::{ProcessingError, Result};
pub use experience::ExperienceLevel;
pub use report::{
    AgeBin, AgeHistogram, ChartData, ColumnMissing, DashboardReport, DatasetOverview,
    DepartmentSalary, FilterOptions, FilterSelection, LevelShare, OutlierReport, OutlierRow,
    SalaryPerformancePoint,
};
pub use role::{Role, RoleMapping};
