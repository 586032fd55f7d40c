//! Logging setup
//!
//! The library only emits `tracing` events; binaries and tests decide where
//! they go. `RUST_LOG` takes precedence over the configured level.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

static INIT_TEST_LOGGING: Once = Once::new();

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr fmt subscriber for the process.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(&config.level))
        .with_ansi(config.ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Initialize trace-level logging captured by the test harness.
///
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT_TEST_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter_for("bytesio=trace"))
            .with_test_writer()
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .try_init();
    });
}
