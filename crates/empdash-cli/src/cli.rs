//! CLI argument definitions for the employee dashboard.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use empdash_model::FilterSelection;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "empdash",
    version,
    about = "Employee dashboard - clean employee data and summarize it",
    long_about = "Load an employee CSV or XLSX file, infer which columns hold salary,\n\
                  department, age, experience and performance, clean the data and\n\
                  report statistics and chart data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values (employee data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a file and print the dashboard report.
    Analyze(AnalyzeArgs),

    /// Print which column was detected for each role.
    Roles(RolesArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Employee data file (.csv or .xlsx).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only chart rows in this department (repeatable; default: all).
    #[arg(long = "department", value_name = "NAME")]
    pub departments: Vec<String>,

    /// Only chart rows at this experience level (repeatable; default: all).
    #[arg(long = "experience-level", value_name = "LEVEL")]
    pub experience_levels: Vec<String>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Filter selection from the repeated flags; an absent flag selects everything.
    pub fn selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::all();
        if !self.departments.is_empty() {
            selection = selection.with_departments(self.departments.clone());
        }
        if !self.experience_levels.is_empty() {
            selection = selection.with_experience_levels(self.experience_levels.clone());
        }
        selection
    }
}

#[derive(Parser)]
pub struct RolesArgs {
    /// Employee data file (.csv or .xlsx).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `--log-level` beats `-v/-q`, and either one disables the `RUST_LOG`
/// override.
pub fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
