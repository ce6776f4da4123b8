//! Logging initialization using the `tracing` ecosystem.
//!
//! The terminal UI owns stdout/stderr, so log lines go to a daily
//! rotating file instead of the console.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "scalar-terminal.log";

/// Install the global subscriber writing to `log_dir`.
///
/// `RUST_LOG` wins over `log_level` when set. Call once at start-up.
pub fn init_logging(log_level: &str, log_dir: &Path) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();
}
