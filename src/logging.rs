//! `tracing` subscriber setup for the command-line front-end

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to install logger: {0}")]
    Init(#[from] TryInitError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Show warnings and errors only.
    #[default]
    Default,
    /// Show debug messages from this crate.
    Verbose,
}

/// Filter used when `RUST_LOG` is not set
fn default_directive(level: Level) -> &'static str {
    match level {
        Level::Default => "warn",
        Level::Verbose => "upgrade_render=debug,warn",
    }
}

/// Configure `tracing` for the given [`Level`], taking into account `RUST_LOG`
///
/// Messages go to stderr. When `log_file` is given, they are also appended
/// to that file as JSON lines; keep the returned guard alive until exit so the
/// file writer is flushed.
pub fn setup_logging(
    level: Level,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(level == Level::Verbose)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
