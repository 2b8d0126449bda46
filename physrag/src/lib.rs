//! # Physrag
//!
//! Lightweight retrieval-augmented generation support for a physics tutoring
//! assistant. Physrag keeps a small corpus of curated Class 10 physics
//! knowledge chunks, ranks them against a free-text query with a
//! character-level similarity heuristic, and assembles the best matches into
//! a bounded context string for injection into a language model prompt.
//!
//! ## Quick Start
//!
//! ```rust
//! use physrag::prelude::*;
//!
//! let retriever = KnowledgeRetriever::new(default_corpus());
//!
//! let chunks = retriever.retrieve("Ohm's law", 3);
//! assert_eq!(chunks[0].subtopic, "Ohm's Law");
//!
//! let context = retriever.get_context("Ohm's law", 1200);
//! assert!(context.starts_with("📚 **Electricity** - Ohm's Law:"));
//! ```
//!
//! ## Architecture
//!
//! - **Models**: knowledge chunks and the in-memory corpus
//! - **Corpus**: the JSON corpus store with a built-in fallback corpus
//! - **Search**: sequence similarity and the weighted relevance score
//! - **Core**: the retriever that ranks chunks and assembles context
//! - **Queries**: query phrasing for quiz, study plan, explanation and chat
//!
//! Ranking is deterministic and needs no model, index or network access.

pub mod config;
pub mod core;
pub mod corpus;
pub mod logging;
pub mod models;
pub mod queries;
pub mod search;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    // Re-export core initialization functions
    pub use crate::{init, init_with_defaults};

    // Re-export the retrieval API
    pub use crate::core::{CorpusSource, KnowledgeRetriever};
    pub use crate::queries::ContextQuery;

    // Re-export config types
    pub use crate::config::{ConfigBuilder, ConfigLoader, LogLevel, PhysragConfig};

    // Re-export model and corpus types
    pub use crate::corpus::{CorpusLoader, LoadOutcome, default_corpus};
    pub use crate::models::{Corpus, KnowledgeChunk, ScoredChunk};
    pub use crate::search::{ScoreCalculator, ScoringConfig};

    // Re-export essential result type
    pub use crate::{PhysragError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Physrag operations
#[derive(Debug, thiserror::Error)]
pub enum PhysragError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Corpus store error
    #[error("Corpus error: {0}")]
    Corpus(#[from] crate::corpus::CorpusError),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for PhysragError {
    fn from(err: crate::config::ConfigError) -> Self {
        PhysragError::Configuration(err.to_string())
    }
}

/// Result type for Physrag operations
pub type Result<T> = std::result::Result<T, PhysragError>;

/// Initialize Physrag from configuration files and the environment
///
/// Configuration is layered from the built-in defaults, the first config
/// file found in the default locations, and `PHYSRAG_` environment variables.
///
/// # Examples
///
/// ```no_run
/// use physrag::prelude::*;
///
/// fn example() -> Result<()> {
///     let retriever = init_with_defaults()?;
///     println!("{}", retriever.context("refraction of light"));
///     Ok(())
/// }
/// ```
pub fn init_with_defaults() -> Result<core::KnowledgeRetriever> {
    let config = config::ConfigLoader::new()
        .load_default_files()
        .load_env()
        .extract()?;
    init(config)
}

/// Initialize Physrag with the provided configuration
///
/// Sets up logging, loads the corpus store (falling back to the built-in
/// corpus if the store is unusable) and returns a ready retriever.
///
/// # Examples
///
/// ```no_run
/// use physrag::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_corpus_path("data/rag_knowledge_base.json")
///         .with_top_k(3)
///         .build()?;
///
///     let retriever = init(config)?;
///     let context = retriever.context_for(&ContextQuery::study_plan(Some("Electricity")));
///     println!("{context}");
///     Ok(())
/// }
/// ```
pub fn init(config: config::PhysragConfig) -> Result<core::KnowledgeRetriever> {
    config::validate_config(&config)?;

    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    core::KnowledgeRetriever::open(&config)
}
