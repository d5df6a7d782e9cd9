//! The migration command.
//!
//! Loads settings, migrates the document in memory, and only then writes
//! it back. A failing step returns before anything touches the file.

mod report;


use crate::cli::Cli;
use crate::config::Config;
use crate::error::{FixError, Result};
use crate::migrate::migrate;
use crate::pyproject;
use tracing::info;

/// Run the migration described by the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_author_overrides(cli.author_name, cli.author_email);
    config.validate()?;

    info!(path = %cli.path.display(), "migrating");
    let mut doc = pyproject::load(&cli.path)?;
    let report = migrate(&mut doc, &config)?;

    if cli.dry_run {
        print!("{}", pyproject::render(&doc));
        return Ok(());
    }

    pyproject::save(&cli.path, &doc)?;
    info!(path = %cli.path.display(), "wrote migrated document");

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| FixError::UserError(format!("failed to serialize report: {}", e)))?;
        println!("{}", json);
    } else {
        report::print_summary(&cli.path, &report);
    }

    Ok(())
}
