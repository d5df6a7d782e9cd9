//! Migration settings for pyproject-fix.
//!
//! This module defines the Config struct, optionally loaded from a YAML file
//! passed with `--config`. Unknown fields are ignored, every field has a
//! default, and values are validated after loading and after CLI overrides.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{Author, Config};
