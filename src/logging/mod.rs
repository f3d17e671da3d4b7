//! Diagnostic logging for the CLI
//!
//! All diagnostics go to stderr through `tracing` so stdout only ever carries
//! command output. The level comes from `--verbose` / `--debug`; `RUST_LOG`
//! overrides it when set.

pub mod level;
pub mod redaction;

pub use level::LogLevel;
pub use redaction::{redact, REDACTED};

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(level >= LogLevel::Debug)
        .without_time()
        .try_init();
}
