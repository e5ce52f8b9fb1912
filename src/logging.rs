//! Diagnostic logging.
//!
//! Sample results go to stdout; logs go to stderr so the two never mix.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless; later calls are ignored.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Log level filter (default: `warn`)
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
