//! Tests for config functionality.

use crate::config::{Author, Config};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.author.name, "Partho");
    assert_eq!(config.author.email, "partho.bhowmick@icloud.com");
    assert_eq!(config.legacy_table, "poetry");
    assert_eq!(config.project_table, "project");
    assert_eq!(config.dev_group, "dev");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.legacy_table, "poetry");
    assert_eq!(config.author, Author::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
author:
  name: Jane Doe
dev_group: test
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.author.name, "Jane Doe");
    assert_eq!(config.dev_group, "test");

    // Unspecified values should use defaults
    assert_eq!(config.author.email, "partho.bhowmick@icloud.com");
    assert_eq!(config.project_table, "project");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
future_option: true
legacy_table: poetry
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.legacy_table, "poetry");
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("author: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_bad_email() {
    let yaml = r#"
author:
  email: not-an-email
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("author.email"));
}

#[test]
fn test_validate_rejects_dotted_table_name() {
    let yaml = "project_table: tool.project\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("project_table"));
}

#[test]
fn test_author_overrides_win() {
    let config = Config::default()
        .with_author_overrides(Some("Jane Doe".to_string()), None);

    assert_eq!(config.author.name, "Jane Doe");
    assert_eq!(config.author.email, "partho.bhowmick@icloud.com");

    let config = config.with_author_overrides(None, Some("jane@example.com".to_string()));
    assert_eq!(config.author.email, "jane@example.com");
}

#[test]
fn test_config_load_from_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "author:").unwrap();
    writeln!(file, "  name: Jane Doe").unwrap();
    writeln!(file, "  email: jane@example.com").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.author.name, "Jane Doe");
    assert_eq!(config.author.email, "jane@example.com");
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load("/nonexistent/path/config.yaml");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
