//! Filesystem utilities for pyproject-fix.
//!
//! The migrated document replaces the original in a single rename, so an
//! interrupted run never leaves a half-written `pyproject.toml` behind.

pub mod atomic;

pub use atomic::atomic_write_file;
