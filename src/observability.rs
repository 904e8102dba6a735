//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering follows `RUST_LOG` (default `info`). Logs are JSON when
/// `LEDGER_LOG_JSON` is set, human-readable otherwise. Output goes to stderr so
/// `export` can write CSV to stdout.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if std::env::var_os("LEDGER_LOG_JSON").is_some() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
