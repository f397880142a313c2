//! CLI library components for the employee dashboard.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
