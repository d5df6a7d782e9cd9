//! Poetry to `[project]` migration.
//!
//! [`migrate`] applies four edits to a parsed `pyproject.toml`, in order:
//!
//! 1. Promote `[tool.poetry]` to `[project]`, dropping `[tool]` if it ends up empty
//! 2. Move `dev-dependencies` to `[tool.poetry.group.dev.dependencies]`
//! 3. Turn the `dependencies` table into `requires-python` plus a list of
//!    version-qualified requirement strings
//! 4. Set `authors` to the configured author
//!
//! Steps 2 and 3 read from the promoted table, since step 1 has already
//! moved the legacy contents there. Any failure aborts the run; callers
//! must discard the document instead of writing it.

mod requirement;
mod steps;


use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use toml_edit::DocumentMut;

/// What a migration run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Dotted name of the legacy table, e.g. `tool.poetry`.
    pub source_table: String,
    pub target_table: String,
    /// `[tool.poetry]` was moved to `[project]`.
    pub promoted: bool,
    /// `[tool]` is absent from the migrated document after having been emptied.
    pub removed_tool_table: bool,
    /// `dev-dependencies` was moved into the dev dependency group.
    pub relocated_dev_dependencies: bool,
    pub requires_python: Option<String>,
    /// The generated `project.dependencies` list.
    pub dependencies: Vec<String>,
    pub authors_set: bool,
}

/// Migrate a parsed document in place.
pub fn migrate(doc: &mut DocumentMut, config: &Config) -> Result<MigrationReport> {
    let promotion = steps::promote_legacy_table(doc, config)?;
    let relocated = steps::relocate_dev_dependencies(doc, config)?;
    let dependencies = steps::migrate_dependencies(doc, config)?;
    let authors_set = steps::set_authors(doc, config);

    // Relocating dev-dependencies may have brought `[tool]` back.
    let removed_tool_table = promotion.removed_tool_table && !doc.contains_key("tool");

    Ok(MigrationReport {
        source_table: format!("tool.{}", config.legacy_table),
        target_table: config.project_table.clone(),
        promoted: promotion.promoted,
        removed_tool_table,
        relocated_dev_dependencies: relocated,
        requires_python: dependencies.requires_python,
        dependencies: dependencies.requirements,
        authors_set,
    })
}
