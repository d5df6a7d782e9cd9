//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing` so stdout stays reserved for
//! the summary or the `--dry-run` document. `RUST_LOG` overrides `-v`.

use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a tracing directive.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2+ → `"debug"`
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global tracing subscriber.
///
/// Uses `try_init()` so repeated calls (e.g. from tests) are harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
