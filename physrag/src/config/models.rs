//! Configuration data types.
//!
//! Every struct is `#[serde(default)]`, so a partial file or a single
//! environment variable only overrides the keys it names.

use crate::corpus::DEFAULT_CORPUS_PATH;
use crate::search::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Context returned when no chunk is relevant to a query
pub const DEFAULT_FALLBACK_CONTEXT: &str = "Physics concepts from Class 10 curriculum.";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PhysragConfig {
    /// Corpus store location and fallback behaviour
    pub corpus: CorpusConfig,

    /// Retrieval and context assembly configuration
    pub retrieval: RetrievalConfig,

    /// Diagnostics output
    pub logging: LoggingConfig,
}

/// Corpus store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the JSON corpus store
    pub path: PathBuf,

    /// Whether to write the built-in corpus back when the store is unusable
    pub persist_default: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CORPUS_PATH),
            persist_default: true,
        }
    }
}

/// Ranking and context assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of chunks used for context assembly
    pub top_k: usize,

    /// Character budget for an assembled context
    pub max_context_length: usize,

    /// Context returned when nothing clears the relevance floor
    pub fallback_context: String,

    /// Relevance scoring weights
    pub scoring: ScoringConfig,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            max_context_length: 1200,
            fallback_context: DEFAULT_FALLBACK_CONTEXT.to_string(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// Where and how diagnostics are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Most verbose level emitted; `RUST_LOG` overrides it when set
    pub level: LogLevel,

    /// Line format
    pub format: LogFormat,

    /// Log file, used only when `stdout` is off
    pub file: Option<PathBuf>,

    /// Write to standard output
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Verbosity threshold, mirroring `tracing::Level`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Every level, most verbose first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Lowercase name, as accepted in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown log level '{s}'"))
    }
}

/// Line format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Full single-line format
    Default,
    /// Newline-delimited JSON objects
    Json,
    /// Abbreviated single-line format
    Compact,
    /// Multi-line, human-oriented format
    Pretty,
}
