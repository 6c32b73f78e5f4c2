//! File-based logging
//!
//! The TUI owns the terminal, so logs go to `<base>/logs/pocketbook.log`
//! and never to stdout/stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::paths::PocketbookPaths;
use crate::config::settings::Settings;
use crate::error::PocketbookError;

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "pocketbook.log";

/// Build the filter: `RUST_LOG` wins, then the configured level
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| settings_filter(settings))
}

fn settings_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::new(&settings.log_level)
}

/// Install the global subscriber
///
/// The returned guard flushes pending lines when dropped; keep it alive
/// for the life of the program.
pub fn init_logging(
    paths: &PocketbookPaths,
    settings: &Settings,
) -> Result<WorkerGuard, PocketbookError> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| PocketbookError::Io(format!("Failed to create log directory: {}", e)))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(file_layer)
        .try_init()
        .map_err(|e| PocketbookError::Config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_level_is_a_valid_filter() {
        let mut settings = Settings::default();
        assert_eq!(settings_filter(&settings).to_string(), "info");

        settings.log_level = "pocketbook=debug".into();
        assert_eq!(settings_filter(&settings).to_string(), "pocketbook=debug");
    }
}
