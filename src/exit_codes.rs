//! Exit code constants for the pyproject-fix CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or unwritable files, bad config)
//! - 2: The input is not valid TOML
//! - 3: The document does not match the legacy Poetry schema

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, I/O failure, or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the input file is not valid TOML.
pub const PARSE_FAILURE: i32 = 2;

/// Schema failure: missing or malformed `dependencies`, unsupported dependency spec.
pub const SCHEMA_FAILURE: i32 = 3;
