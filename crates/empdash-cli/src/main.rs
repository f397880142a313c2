//! Employee dashboard CLI.

use clap::Parser;

use empdash_cli::cli::{Cli, Command, log_config_from_cli};
use empdash_cli::commands::{run_analyze, run_roles};
use empdash_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Roles(args) => run_roles(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
