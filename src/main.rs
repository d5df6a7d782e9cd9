//! pyproject-fix: migrate a Poetry `pyproject.toml` to the `[project]` layout.
//!
//! This is the main entry point for the CLI. It parses arguments, sets up
//! logging, runs the migration, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod migrate;
pub mod pyproject;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
