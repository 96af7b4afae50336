use crate::config::Config;
use crate::utils::paths::ensure_log_dir_exists;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "tingly-landing.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily-rotated file; the TUI owns the terminal.
    File,
    Stderr,
}

/// Install the global subscriber. RUST_LOG wins over the configured level.
///
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init(config: &Config, target: LogTarget) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    match target {
        LogTarget::File => {
            let log_dir = ensure_log_dir_exists()?;
            let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            fmt()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .init();

            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .init();

            Ok(None)
        }
    }
}

fn default_directive(level: &str) -> String {
    format!("tingly_landing={level}")
}
