//! Reading and writing `pyproject.toml` without disturbing its formatting.
//!
//! Documents are parsed with `toml_edit`, so comments, whitespace, and key
//! order of everything the migration does not touch survive unchanged.

use crate::error::{FixError, Result};
use std::path::Path;
use toml_edit::DocumentMut;

/// Default document path, relative to the working directory.
pub const DEFAULT_PATH: &str = "pyproject.toml";

/// Load and parse a TOML document from disk.
pub fn load<P: AsRef<Path>>(path: P) -> Result<DocumentMut> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        FixError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    parse(&content).map_err(|e| match e {
        FixError::ParseError(msg) => FixError::ParseError(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parse a TOML document from a string.
pub fn parse(content: &str) -> Result<DocumentMut> {
    content
        .parse::<DocumentMut>()
        .map_err(|e| FixError::ParseError(e.to_string().trim_end().to_string()))
}

/// Serialize a document to a string.
pub fn render(doc: &DocumentMut) -> String {
    doc.to_string()
}

/// Atomically write the document back to disk.
pub fn save<P: AsRef<Path>>(path: P, doc: &DocumentMut) -> Result<()> {
    crate::fs::atomic_write_file(path, &render(doc))
}
