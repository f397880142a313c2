//! Argument parsing and logging configuration.

use clap::Parser;
use tracing::level_filters::LevelFilter;

use empdash_cli::cli::{Cli, Command, OutputFormatArg, log_config_from_cli};
use empdash_cli::logging::LogFormat;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse arguments")
}

#[test]
fn analyze_defaults() {
    let cli = parse(&["empdash", "analyze", "staff.csv"]);
    let Command::Analyze(args) = &cli.command else {
        panic!("expected analyze");
    };
    assert_eq!(args.file.to_str(), Some("staff.csv"));
    assert_eq!(args.format, OutputFormatArg::Table);
    assert!(args.output.is_none());
    assert!(args.selection().is_all());
}

#[test]
fn repeated_filters_build_a_selection() {
    let cli = parse(&[
        "empdash",
        "analyze",
        "staff.xlsx",
        "--department",
        "IT",
        "--department",
        "HR",
        "--experience-level",
        "Senior",
        "--format",
        "json",
    ]);
    let Command::Analyze(args) = &cli.command else {
        panic!("expected analyze");
    };
    let selection = args.selection();
    assert_eq!(
        selection.departments,
        Some(vec!["IT".to_string(), "HR".to_string()])
    );
    assert_eq!(selection.experience_levels, Some(vec!["Senior".to_string()]));
    assert_eq!(args.format, OutputFormatArg::Json);
}

#[test]
fn roles_requires_a_file() {
    assert!(Cli::try_parse_from(["empdash", "roles"]).is_err());
    let cli = parse(&["empdash", "roles", "staff.csv"]);
    assert!(matches!(cli.command, Command::Roles(_)));
}

#[test]
fn default_logging_defers_to_rust_log() {
    let cli = parse(&["empdash", "--color", "never", "roles", "staff.csv"]);
    let config = log_config_from_cli(&cli);
    assert_eq!(config.level_filter, LevelFilter::WARN);
    assert!(config.use_env_filter);
    assert!(!config.with_ansi);
    assert!(!config.log_data);
    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
fn verbosity_flags_override_rust_log() {
    let cli = parse(&["empdash", "-v", "roles", "staff.csv"]);
    let config = log_config_from_cli(&cli);
    assert_eq!(config.level_filter, LevelFilter::INFO);
    assert!(!config.use_env_filter);
}

#[test]
fn explicit_log_level_beats_verbosity() {
    let cli = parse(&[
        "empdash",
        "-q",
        "--log-level",
        "trace",
        "--log-format",
        "json",
        "--log-data",
        "roles",
        "staff.csv",
    ]);
    let config = log_config_from_cli(&cli);
    assert_eq!(config.level_filter, LevelFilter::TRACE);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.log_data);
}

#[test]
fn log_file_disables_auto_color() {
    let cli = parse(&["empdash", "--log-file", "run.log", "roles", "staff.csv"]);
    let config = log_config_from_cli(&cli);
    assert!(!config.with_ansi);
    assert_eq!(
        config.log_file.as_deref().and_then(|path| path.to_str()),
        Some("run.log")
    );
}
