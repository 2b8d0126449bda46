//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &PhysragConfig) -> Result<(), ConfigError> {
    validate_corpus_config(&config.corpus)?;
    validate_retrieval_config(&config.retrieval)?;
    Ok(())
}

/// Validate corpus store configuration.
fn validate_corpus_config(config: &CorpusConfig) -> Result<(), ConfigError> {
    if config.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Corpus path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate retrieval configuration.
fn validate_retrieval_config(config: &RetrievalConfig) -> Result<(), ConfigError> {
    if config.top_k == 0 {
        return Err(ConfigError::ValidationError(
            "top_k must be at least 1".to_string(),
        ));
    }

    if config.max_context_length == 0 {
        return Err(ConfigError::ValidationError(
            "max_context_length must be at least 1".to_string(),
        ));
    }

    if config.fallback_context.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Fallback context cannot be empty".to_string(),
        ));
    }

    config
        .scoring
        .validate()
        .map_err(ConfigError::ValidationError)?;

    Ok(())
}
