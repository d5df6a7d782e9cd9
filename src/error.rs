//! Error types for the pyproject-fix CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pyproject-fix operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum FixError {
    /// Invalid arguments, config, or a filesystem operation failed.
    #[error("{0}")]
    UserError(String),

    /// The input could not be parsed as TOML.
    #[error("Parse failed: {0}")]
    ParseError(String),

    /// The document does not have the shape of a Poetry pyproject.
    #[error("Unexpected document layout: {0}")]
    SchemaError(String),
}

impl FixError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixError::UserError(_) => exit_codes::USER_ERROR,
            FixError::ParseError(_) => exit_codes::PARSE_FAILURE,
            FixError::SchemaError(_) => exit_codes::SCHEMA_FAILURE,
        }
    }
}

/// Result type alias for pyproject-fix operations.
pub type Result<T> = std::result::Result<T, FixError>;
