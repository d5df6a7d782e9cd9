//! Human-readable summary of a migration run.

use crate::migrate::MigrationReport;
use std::path::Path;

pub(super) fn print_summary(path: &Path, report: &MigrationReport) {
    print!("{}", format_summary(path, report));
}

pub(super) fn format_summary(path: &Path, report: &MigrationReport) -> String {
    let mut out = format!("Migrated {}\n\n", path.display());

    if report.promoted {
        out.push_str(&format!(
            "  [{}] -> [{}]\n",
            report.source_table, report.target_table
        ));
    }
    if report.removed_tool_table {
        out.push_str("  removed empty [tool]\n");
    }
    if report.relocated_dev_dependencies {
        out.push_str("  dev-dependencies -> dependency group\n");
    }
    if let Some(python) = &report.requires_python {
        out.push_str(&format!("  requires-python = \"{}\"\n", python));
    }
    out.push_str(&format!("  dependencies: {}\n", report.dependencies.len()));
    for dep in &report.dependencies {
        out.push_str(&format!("    {}\n", dep));
    }
    if report.authors_set {
        out.push_str("  authors set\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_changes() {
        let report = MigrationReport {
            source_table: "tool.poetry".to_string(),
            target_table: "project".to_string(),
            promoted: true,
            removed_tool_table: true,
            relocated_dev_dependencies: false,
            requires_python: Some("^3.10".to_string()),
            dependencies: vec!["requests^2.0".to_string()],
            authors_set: true,
        };

        let summary = format_summary(Path::new("pyproject.toml"), &report);

        assert!(summary.starts_with("Migrated pyproject.toml\n"));
        assert!(summary.contains("[tool.poetry] -> [project]"));
        assert!(summary.contains("removed empty [tool]"));
        assert!(!summary.contains("dev-dependencies"));
        assert!(summary.contains("requires-python = \"^3.10\""));
        assert!(summary.contains("dependencies: 1\n    requests^2.0\n"));
        assert!(summary.contains("authors set"));
    }

    #[test]
    fn summary_uses_configured_table_names() {
        let report = MigrationReport {
            source_table: "tool.legacy".to_string(),
            target_table: "metadata".to_string(),
            promoted: true,
            ..MigrationReport::default()
        };

        let summary = format_summary(Path::new("pyproject.toml"), &report);

        assert!(summary.contains("[tool.legacy] -> [metadata]"));
        assert!(!summary.contains("[tool.poetry]"));
    }
}
