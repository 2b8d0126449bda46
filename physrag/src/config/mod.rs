//! Configuration for the corpus store, retrieval and logging.
//!
//! Values are layered with figment: built-in defaults, then an optional
//! TOML/YAML/JSON file, then `PHYSRAG_` environment variables. Both
//! [`ConfigLoader::extract`] and [`ConfigBuilder::build`] validate the result.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Files searched, in order, in the working directory
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "physrag.toml",
    "physrag.yaml",
    "physrag.yml",
    "physrag.json",
    ".physrag/config.toml",
    ".physrag/config.yaml",
    ".physrag/config.yml",
    ".physrag/config.json",
];

/// Prefix of environment variables that override configuration keys
pub const ENV_PREFIX: &str = "PHYSRAG_";

/// Why a configuration could not be produced
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration file is missing or has an unsupported extension
    #[error("Cannot load configuration file: {0}")]
    FileLoadError(String),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// Merged sources do not deserialize into the configuration types
    #[error("Malformed configuration: {0}")]
    ParseError(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
