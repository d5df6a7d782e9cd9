//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// The author record written to `[project].authors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "Partho".to_string(),
            email: "partho.bhowmick@icloud.com".to_string(),
        }
    }
}

/// Settings for a single migration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author that replaces whatever `authors` the document carried.
    pub author: Author,

    // =========================================================================
    // Table names
    // =========================================================================
    /// Sub-table of `[tool]` holding the legacy metadata (default: "poetry").
    #[serde(default = "default_legacy_table")]
    pub legacy_table: String,

    /// Top-level table the legacy metadata is promoted to (default: "project").
    #[serde(default = "default_project_table")]
    pub project_table: String,

    /// Dependency group that receives the old `dev-dependencies` (default: "dev").
    #[serde(default = "default_dev_group")]
    pub dev_group: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: Author::default(),
            legacy_table: default_legacy_table(),
            project_table: default_project_table(),
            dev_group: default_dev_group(),
        }
    }
}

fn default_legacy_table() -> String {
    "poetry".to_string()
}

fn default_project_table() -> String {
    "project".to_string()
}

fn default_dev_group() -> String {
    "dev".to_string()
}
