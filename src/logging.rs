//! Tracing setup
//!
//! The interactive UI draws on the alternate screen, so any log line written
//! to the terminal would garble it. In that mode logs go to a file only.
//! Headless runs log to stderr.
//!
//! Filter precedence: RUST_LOG > configured level > "info".

use crate::config::Config;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "bracketty.log";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Log file under the configured directory
    File,
    /// Standard error
    Stderr,
}

fn filter_for(config: &Config) -> EnvFilter {
    let default_filter = format!("bracketty={}", config.log_level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the program exits.
pub fn init(config: &Config, target: LogTarget) -> Option<WorkerGuard> {
    let filter = filter_for(config);

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        }
        LogTarget::File => {
            if let Err(e) = std::fs::create_dir_all(&config.log_dir) {
                // No usable log directory: run without a subscriber rather
                // than writing over the UI.
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.log_dir, e
                );
                return None;
            }

            let guard = init_file(filter, &config.log_dir);
            tracing::info!(log_dir = ?config.log_dir, "logging to file");
            Some(guard)
        }
    }
}

fn init_file(filter: EnvFilter, dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    guard
}
