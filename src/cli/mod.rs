//! CLI argument parsing for pyproject-fix.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The migration itself lives in the `commands` module.

use crate::pyproject::DEFAULT_PATH;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Migrate a Poetry pyproject.toml to the standard [project] layout.
///
/// Promotes [tool.poetry] to [project], moves dev-dependencies into the
/// dev dependency group, flattens dependencies into requirement strings,
/// and sets the author. The file is rewritten in place; comments and
/// formatting outside the edited tables are preserved.
#[derive(Parser, Debug)]
#[command(name = "pyproject-fix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the pyproject.toml to migrate.
    #[arg(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// YAML file with migration settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Author name to write (overrides the config file).
    #[arg(long, value_name = "NAME")]
    pub author_name: Option<String>,

    /// Author email to write (overrides the config file).
    #[arg(long, value_name = "EMAIL")]
    pub author_email: Option<String>,

    /// Print the migrated document instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the migration report as JSON.
    #[arg(long, conflicts_with = "dry_run")]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
