//! Shared utilities for the employee dashboard crates.
//!
//! This crate provides Polars `AnyValue` conversions and column accessors
//! that read a `DataFrame` through the tagged [`empdash_model::CellValue`],
//! plus the list of text markers that load as missing.

pub mod missing;
pub mod polars;

pub use self::missing::{NA_VALUES, is_na_token};
pub use self::polars::{
    any_to_cell, cell_at, cell_to_string, column_cells, column_names, format_numeric,
};
