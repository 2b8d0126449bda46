//! Tracing subscriber setup.
//!
//! [`init`] installs a single global subscriber built from a [`LoggingConfig`].
//! When `RUST_LOG` is set it overrides the configured level, so operators can
//! raise verbosity for one module without editing configuration.


use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::io;
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Flush guard for the file writer; dropped only at process exit
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file or its directory could not be created
    #[error("Failed to open log file: {0}")]
    IoError(#[from] io::Error),

    /// A level name that is not trace, debug, info, warn or error
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),

    /// The global subscriber could not be installed
    #[error("Could not install subscriber: {0}")]
    SubscriberError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for logging setup
pub type Result<T> = std::result::Result<T, LogError>;

/// Install the global subscriber described by `config`.
///
/// Calling this when a global subscriber is already installed is not an
/// error. With `stdout` disabled and no file configured nothing is installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let Some(writer) = make_writer(config)? else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let layer = format_layer(config.format, writer).with_filter(filter);

    match tracing_subscriber::registry().with(layer).try_init() {
        Ok(()) => Ok(()),
        // Lost a race with another initializer
        Err(_) if tracing::dispatcher::has_been_set() => Ok(()),
        Err(e) => Err(LogError::SubscriberError(Box::new(e))),
    }
}

/// The fmt layer for a format, writing through `writer`.
fn format_layer(
    format: LogFormat,
    writer: BoxMakeWriter,
) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer().with_writer(writer).with_target(true);

    match format {
        LogFormat::Json => layer.json().with_line_number(true).boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().with_line_number(true).boxed(),
        LogFormat::Default => layer.boxed(),
    }
}

/// Where log lines go: stdout wins over a configured file.
fn make_writer(config: &LoggingConfig) -> Result<Option<BoxMakeWriter>> {
    if config.stdout {
        return Ok(Some(BoxMakeWriter::new(io::stdout)));
    }

    match &config.file {
        Some(path) => {
            let (writer, guard) = non_blocking_file(path)?;
            // Only the first installed subscriber's guard matters
            let _ = FILE_GUARD.set(guard);
            Ok(Some(BoxMakeWriter::new(writer)))
        }
        None => Ok(None),
    }
}

/// Open `path` for appending through a background writer thread.
fn non_blocking_file(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path has no file name: {}", path.display()),
        )
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    Ok(tracing_appender::non_blocking(
        tracing_appender::rolling::never(dir, file_name),
    ))
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        if level == Level::TRACE {
            LogLevel::Trace
        } else if level == Level::DEBUG {
            LogLevel::Debug
        } else if level == Level::INFO {
            LogLevel::Info
        } else if level == Level::WARN {
            LogLevel::Warn
        } else {
            LogLevel::Error
        }
    }
}

/// Parse a level name, case-insensitively.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

/// Convert a configured level to a tracing level.
pub fn log_level_to_level(level: LogLevel) -> Level {
    level.into()
}

/// Convert a tracing level to a configured level.
pub fn level_to_log_level(level: Level) -> LogLevel {
    level.into()
}
