//! Process-wide logging setup for binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the binary, which calls [`init_logging`] once at startup.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the log file. Created if missing.
    pub dir: PathBuf,
    /// Log file name inside `dir`.
    pub file_name: String,
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            file_name: "trading.log".to_string(),
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Full path of the log file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Open (or create) the append-only log file, creating its directory.
pub fn open_log_file(config: &LogConfig) -> Result<File, LoggingError> {
    let path = config.file_path();
    let io_err = |source| LoggingError::Io {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(&config.dir).map_err(io_err)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(io_err)
}

/// Install a subscriber that writes to both stderr and the log file.
///
/// The file layer has ANSI colors disabled so the log stays grep-able.
pub fn init_logging(config: &LogConfig) -> Result<PathBuf, LoggingError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let file = open_log_file(config)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    let path = config.file_path();
    tracing::info!(log_file = %path.display(), "Logging initialized");

    Ok(path)
}
