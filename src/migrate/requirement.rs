//! Version-qualified requirement strings.
//!
//! Poetry keys dependencies by name and puts the constraint in the value,
//! either as a bare string (`requests = "^2.0"`) or as a table carrying
//! `version` and optional `extras`. The `[project]` layout wants a flat
//! list of strings, so each entry is rendered as
//! `name[extra,...]constraint`.

use crate::error::{FixError, Result};
use std::fmt;
use toml_edit::Item;

/// A single dependency in its flattened form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub extras: Vec<String>,
    /// `None` when Poetry allowed any version (`*`).
    pub constraint: Option<String>,
}

impl Requirement {
    /// Build a requirement from a Poetry dependency entry.
    ///
    /// # Returns
    ///
    /// * `Ok(Requirement)` - The entry had a string constraint or a `version` key
    /// * `Err(FixError::SchemaError)` - Git, path, or url sources, multiple
    ///   constraints, or malformed `extras`
    pub fn from_poetry(name: &str, spec: &Item) -> Result<Self> {
        if let Some(constraint) = spec.as_str() {
            return Ok(Self {
                name: name.to_string(),
                extras: Vec::new(),
                constraint: normalize_constraint(constraint),
            });
        }

        let Some(table) = spec.as_table_like() else {
            return Err(unsupported(name, "expected a version string or a table"));
        };

        // Markers, optional flags, and sources have no place in a bare
        // requirement string.
        if let Some((key, _)) = table
            .iter()
            .find(|(key, _)| !matches!(*key, "version" | "extras"))
        {
            return Err(unsupported(
                name,
                &format!("`{}` cannot be expressed in a version-qualified requirement", key),
            ));
        }

        let version = table
            .get("version")
            .and_then(Item::as_str)
            .ok_or_else(|| {
                unsupported(
                    name,
                    "no `version` key (git, path, and url sources have no version constraint)",
                )
            })?;

        let extras = match table.get("extras") {
            None => Vec::new(),
            Some(item) => item
                .as_array()
                .and_then(|array| {
                    array
                        .iter()
                        .map(|v| v.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .ok_or_else(|| unsupported(name, "`extras` must be an array of strings"))?,
        };

        Ok(Self {
            name: name.to_string(),
            extras,
            constraint: normalize_constraint(version),
        })
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        if let Some(constraint) = &self.constraint {
            f.write_str(constraint)?;
        }
        Ok(())
    }
}

fn normalize_constraint(raw: &str) -> Option<String> {
    match raw.trim() {
        "" | "*" => None,
        constraint => Some(constraint.to_string()),
    }
}

fn unsupported(name: &str, reason: &str) -> FixError {
    FixError::SchemaError(format!("unsupported dependency '{}': {}", name, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml_edit::DocumentMut;

    fn entry(toml: &str) -> Item {
        let doc: DocumentMut = toml.parse().unwrap();
        doc["dep"].clone()
    }

    #[test]
    fn test_string_constraint_is_concatenated() {
        let req = Requirement::from_poetry("requests", &entry(r#"dep = "^2.0""#)).unwrap();
        assert_eq!(req.to_string(), "requests^2.0");
    }

    #[test]
    fn test_wildcard_constraint_yields_bare_name() {
        let req = Requirement::from_poetry("httpx", &entry(r#"dep = "*""#)).unwrap();
        assert_eq!(req.constraint, None);
        assert_eq!(req.to_string(), "httpx");
    }

    #[test]
    fn test_inline_table_with_version() {
        let req =
            Requirement::from_poetry("aiohttp", &entry(r#"dep = { version = ">=3.8" }"#)).unwrap();
        assert_eq!(req.to_string(), "aiohttp>=3.8");
    }

    #[test]
    fn test_extras_are_bracketed() {
        let spec = entry(r#"dep = { version = "^0.20", extras = ["standard", "watch"] }"#);
        let req = Requirement::from_poetry("uvicorn", &spec).unwrap();
        assert_eq!(req.extras, vec!["standard", "watch"]);
        assert_eq!(req.to_string(), "uvicorn[standard,watch]^0.20");
    }

    #[test]
    fn test_git_source_is_rejected() {
        let spec = entry(r#"dep = { git = "https://example.com/lib.git" }"#);
        let err = Requirement::from_poetry("lib", &spec).unwrap_err();
        assert!(matches!(err, FixError::SchemaError(_)));
        assert!(err.to_string().contains("'lib'"));
    }

    #[test]
    fn test_markers_are_rejected() {
        let spec = entry(r#"dep = { version = "^0.17", markers = "sys_platform != 'win32'" }"#);
        let err = Requirement::from_poetry("uvloop", &spec).unwrap_err();
        assert!(matches!(err, FixError::SchemaError(_)));
        assert!(err.to_string().contains("`markers`"));
    }

    #[test]
    fn test_optional_flag_is_rejected() {
        let spec = entry(r#"dep = { version = "^4.0", optional = true }"#);
        let err = Requirement::from_poetry("redis", &spec).unwrap_err();
        assert!(err.to_string().contains("'redis'"));
        assert!(err.to_string().contains("`optional`"));
    }

    #[test]
    fn test_python_gate_and_source_are_rejected() {
        let spec = entry(r#"dep = { version = "^1.0", python = "<3.11" }"#);
        assert!(Requirement::from_poetry("tomli", &spec).is_err());

        let spec = entry(r#"dep = { version = "^2.0", source = "private" }"#);
        assert!(Requirement::from_poetry("internal", &spec).is_err());
    }

    #[test]
    fn test_multiple_constraints_are_rejected() {
        let spec = entry(r#"dep = [{ version = "<2", python = "<3.8" }, { version = ">=2" }]"#);
        assert!(Requirement::from_poetry("numpy", &spec).is_err());
    }

    #[test]
    fn test_non_string_extras_are_rejected() {
        let spec = entry(r#"dep = { version = "^1", extras = "all" }"#);
        let err = Requirement::from_poetry("celery", &spec).unwrap_err();
        assert!(err.to_string().contains("extras"));
    }
}
