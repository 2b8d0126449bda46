//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::search::ScoringConfig;
use std::path::Path;

/// Builder for creating PhysragConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: PhysragConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: PhysragConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: PhysragConfig) -> Self {
        Self { config }
    }

    /// Set the corpus store path.
    pub fn with_corpus_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.corpus.path = path.as_ref().to_path_buf();
        self
    }

    /// Control whether the built-in corpus is written back on fallback.
    pub fn with_persist_default(mut self, persist: bool) -> Self {
        self.config.corpus.persist_default = persist;
        self
    }

    /// Set the number of chunks used for context assembly.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.config.retrieval.top_k = top_k;
        self
    }

    /// Set the character budget for assembled context.
    pub fn with_max_context_length(mut self, max_length: usize) -> Self {
        self.config.retrieval.max_context_length = max_length;
        self
    }

    /// Set the context returned when nothing is relevant.
    pub fn with_fallback_context(mut self, fallback: impl Into<String>) -> Self {
        self.config.retrieval.fallback_context = fallback.into();
        self
    }

    /// Replace the scoring configuration.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.retrieval.scoring = scoring;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file instead of stdout.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Use the default logging configuration.
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging = LoggingConfig::default();
        self
    }

    /// Build the configuration, validating it.
    pub fn build(self) -> Result<PhysragConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }

    /// Development preset: verbose pretty logs.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Testing preset: a scratch corpus path, no write-back and quiet logs.
    pub fn testing() -> Self {
        Self::new()
            .with_corpus_path("./test_data/rag_knowledge_base.json")
            .with_persist_default(false)
            .with_log_level(LogLevel::Warn)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
