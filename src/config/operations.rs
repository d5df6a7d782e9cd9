//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{FixError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(FixError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FixError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to `null`, which serde_yaml rejects for structs.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| FixError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_author_overrides(mut self, name: Option<String>, email: Option<String>) -> Self {
        if let Some(name) = name {
            self.author.name = name;
        }
        if let Some(email) = email {
            self.author.email = email;
        }
        self
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - author name must be non-empty
    /// - author email must contain `@`
    /// - table and group names must be non-empty and contain no `.`
    pub fn validate(&self) -> Result<()> {
        if self.author.name.trim().is_empty() {
            return Err(FixError::UserError(
                "config validation failed: author.name must not be empty".to_string(),
            ));
        }

        if !self.author.email.contains('@') {
            return Err(FixError::UserError(format!(
                "config validation failed: author.email '{}' is not an email address",
                self.author.email
            )));
        }

        for (field, value) in [
            ("legacy_table", &self.legacy_table),
            ("project_table", &self.project_table),
            ("dev_group", &self.dev_group),
        ] {
            if value.is_empty() || value.contains('.') {
                return Err(FixError::UserError(format!(
                    "config validation failed: {} must be a single non-empty key (found '{}')",
                    field, value
                )));
            }
        }

        Ok(())
    }
}
