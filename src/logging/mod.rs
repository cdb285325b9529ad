//! Application logging functionality
//!
//! Installs the tracing subscriber and handles log file management

use crate::core::config::{ConfigFile, APP_NAME};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// File name of today's log file
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("{APP_NAME}-{timestamp}.log")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        return format!("{APP_NAME}=debug");
    }

    #[cfg(debug_assertions)]
    {
        // Debug builds: progress and decode details
        format!("{APP_NAME}=info")
    }

    #[cfg(not(debug_assertions))]
    {
        // Release builds: only problems
        format!("{APP_NAME}=warn")
    }
}

/// Keeps the background log writer alive. Dropping it flushes pending
/// file output, so hold it until the program exits.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// Logs always go to stderr so they never mix with BDF or JSON on stdout.
/// With `log_to_file` they are also appended to today's file in
/// [`logs_dir`].
pub fn init_logging(verbose: bool, log_to_file: bool) -> anyhow::Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if log_to_file {
        initialize_logs_directory()?;
        let appender = tracing_appender::rolling::never(logs_dir(), current_log_file_name());
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init()?;

        tracing::debug!("Logging to {:?}", current_log_file());
        Ok(LoggingGuard {
            _file_writer: Some(guard),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()?;

        Ok(LoggingGuard { _file_writer: None })
    }
}
