//! The individual document edits, applied in order by [`super::migrate`].

use super::requirement::Requirement;
use crate::config::Config;
use crate::error::{FixError, Result};
use toml_edit::{Array, DocumentMut, InlineTable, Item, Table, TableLike, value};
use tracing::{debug, info, warn};

/// Outcome of promoting the legacy table.
#[derive(Debug, Default)]
pub(super) struct Promotion {
    pub promoted: bool,
    pub removed_tool_table: bool,
}

/// Outcome of flattening the dependency table.
#[derive(Debug, Default)]
pub(super) struct Dependencies {
    pub requires_python: Option<String>,
    pub requirements: Vec<String>,
}

/// Move `[tool.<legacy>]` to the top-level project table.
///
/// `[tool]` is dropped when nothing else is left in it.
pub(super) fn promote_legacy_table(doc: &mut DocumentMut, config: &Config) -> Result<Promotion> {
    let Some(tool) = doc.get_mut("tool").and_then(Item::as_table_like_mut) else {
        debug!("no [tool] table, nothing to promote");
        return Ok(Promotion::default());
    };
    let Some(legacy) = tool.remove(&config.legacy_table) else {
        debug!(table = %config.legacy_table, "no legacy table under [tool]");
        return Ok(Promotion::default());
    };
    let tool_is_empty = tool.is_empty();

    let mut table = legacy.into_table().map_err(|_| {
        FixError::SchemaError(format!("[tool.{}] is not a table", config.legacy_table))
    })?;
    table.set_implicit(false);
    table.set_dotted(false);

    if doc.contains_key(&config.project_table) {
        warn!(
            table = %config.project_table,
            "replacing existing [{}] with [tool.{}]",
            config.project_table,
            config.legacy_table
        );
    }
    doc.insert(&config.project_table, Item::Table(table));
    info!(
        "promoted [tool.{}] to [{}]",
        config.legacy_table, config.project_table
    );

    if tool_is_empty {
        doc.remove("tool");
        debug!("removed empty [tool] table");
    }

    Ok(Promotion {
        promoted: true,
        removed_tool_table: tool_is_empty,
    })
}

/// Move `dev-dependencies` to `tool.<legacy>.group.<dev_group>.dependencies`.
///
/// Dependency groups that were already declared travel back under
/// `tool.<legacy>.group` first, since `[project]` has no place for them.
pub(super) fn relocate_dev_dependencies(doc: &mut DocumentMut, config: &Config) -> Result<bool> {
    let Some(project) = doc
        .get_mut(&config.project_table)
        .and_then(Item::as_table_like_mut)
    else {
        return Ok(false);
    };
    let groups = project.remove("group");
    let dev = project.remove("dev-dependencies");

    if let Some(groups) = groups {
        let legacy = nested_table(doc.as_table_mut(), &["tool", config.legacy_table.as_str()])?;
        legacy.insert("group", groups);
        info!("moved dependency groups to [tool.{}.group]", config.legacy_table);
    }

    let Some(dev) = dev else {
        debug!("no dev-dependencies to relocate");
        return Ok(false);
    };

    let path = ["tool", config.legacy_table.as_str(), "group", config.dev_group.as_str()];
    let target = format!("{}.dependencies", path.join("."));
    let group = nested_table(doc.as_table_mut(), &path)?;
    if group.contains_key("dependencies") {
        merge_dependencies(group, dev, &target)?;
        info!("merged dev-dependencies into [{}]", target);
    } else {
        group.insert("dependencies", dev);
        info!("moved dev-dependencies to [{}]", target);
    }

    Ok(true)
}

/// Split the legacy dependency table into `requires-python` and a list of
/// requirement strings on the project table.
pub(super) fn migrate_dependencies(
    doc: &mut DocumentMut,
    config: &Config,
) -> Result<Dependencies> {
    let Some(project) = doc
        .get_mut(&config.project_table)
        .and_then(Item::as_table_like_mut)
    else {
        return Err(FixError::SchemaError(format!(
            "neither [tool.{}] nor [{}] is present",
            config.legacy_table, config.project_table
        )));
    };

    let Some(deps) = project.remove("dependencies") else {
        return Err(FixError::SchemaError(format!(
            "[tool.{}.dependencies] is missing",
            config.legacy_table
        )));
    };
    let Some(table) = deps.as_table_like() else {
        return Err(FixError::SchemaError(format!(
            "`dependencies` in [{}] is not a table (is the file already migrated?)",
            config.project_table
        )));
    };

    let mut migrated = Dependencies::default();
    for (name, spec) in table.iter() {
        if name == "python" {
            let constraint = spec
                .as_str()
                .or_else(|| {
                    spec.as_table_like()
                        .and_then(|t| t.get("version"))
                        .and_then(Item::as_str)
                })
                .ok_or_else(|| {
                    FixError::SchemaError("`python` must be a version string".to_string())
                })?;
            migrated.requires_python = Some(constraint.to_string());
            continue;
        }

        let requirement = Requirement::from_poetry(name, spec)?;
        debug!(%requirement, "converted dependency");
        migrated.requirements.push(requirement.to_string());
    }

    if let Some(python) = &migrated.requires_python {
        project.insert("requires-python", value(python.as_str()));
    } else {
        warn!("no `python` constraint found, requires-python left unset");
    }
    project.insert("dependencies", value(requirement_array(&migrated.requirements)));
    info!(
        count = migrated.requirements.len(),
        "converted dependencies to requirement strings"
    );

    Ok(migrated)
}

/// Replace `authors` on the project table with the configured author.
///
/// Returns `false` when there is no project table to write to.
pub(super) fn set_authors(doc: &mut DocumentMut, config: &Config) -> bool {
    let Some(project) = doc
        .get_mut(&config.project_table)
        .and_then(Item::as_table_like_mut)
    else {
        return false;
    };

    let mut author = InlineTable::new();
    author.insert("name", config.author.name.as_str().into());
    author.insert("email", config.author.email.as_str().into());

    let mut authors = Array::new();
    authors.push(author);
    project.insert("authors", value(authors));
    debug!(name = %config.author.name, email = %config.author.email, "set authors");

    true
}

/// Add each `dev` entry to the group's existing `dependencies`.
///
/// A package declared in both places is an error rather than a silent pick.
fn merge_dependencies(group: &mut dyn TableLike, dev: Item, target: &str) -> Result<()> {
    let existing = group
        .get_mut("dependencies")
        .and_then(Item::as_table_like_mut)
        .ok_or_else(|| FixError::SchemaError(format!("[{}] is not a table", target)))?;
    let dev = dev.as_table_like().ok_or_else(|| {
        FixError::SchemaError("`dev-dependencies` is not a table".to_string())
    })?;

    for (name, spec) in dev.iter() {
        if existing.contains_key(name) {
            return Err(FixError::SchemaError(format!(
                "'{}' is declared in both dev-dependencies and [{}]",
                name, target
            )));
        }
        existing.insert(name, spec.clone());
    }

    Ok(())
}

/// Walk `path` from `root`, creating implicit tables for missing segments.
fn nested_table<'a>(root: &'a mut Table, path: &[&str]) -> Result<&'a mut dyn TableLike> {
    let mut current: &'a mut dyn TableLike = root;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .entry(key)
            .or_insert_with(implicit_table)
            .as_table_like_mut()
            .ok_or_else(|| {
                FixError::SchemaError(format!("`{}` is not a table", path[..=depth].join(".")))
            })?;
    }
    Ok(current)
}

fn implicit_table() -> Item {
    let mut table = Table::new();
    table.set_implicit(true);
    Item::Table(table)
}

/// One requirement per line, with a trailing comma.
fn requirement_array(requirements: &[String]) -> Array {
    let mut array: Array = requirements.iter().map(String::as_str).collect();
    if !array.is_empty() {
        for item in array.iter_mut() {
            item.decor_mut().set_prefix("\n    ");
        }
        array.set_trailing_comma(true);
        array.set_trailing("\n");
    }
    array
}
