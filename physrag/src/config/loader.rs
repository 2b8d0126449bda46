//! Layered configuration loading.
//!
//! Sources are merged in call order, later sources overriding earlier ones:
//! built-in defaults, then whichever files and providers the caller adds,
//! then (usually last) `PHYSRAG_` environment variables.

use super::{ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, Result, models::*, validation};
use figment::{
    Figment, Provider,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::Path;
use tracing::debug;

/// Extensions tried for `config.*` in the platform configuration directory
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Configuration file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Builds a [`PhysragConfig`] from defaults, files and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// Start from the built-in defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(PhysragConfig::default())),
        }
    }

    /// Merge a TOML, YAML or JSON file. The file must exist.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigError::FileLoadError(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let format = FileFormat::from_path(path).ok_or_else(|| {
            ConfigError::FileLoadError(format!(
                "{} is not a .toml, .yaml, .yml or .json file",
                path.display()
            ))
        })?;

        match format {
            FileFormat::Toml => self.merge(Toml::file(path)),
            FileFormat::Yaml => self.merge(Yaml::file(path)),
            FileFormat::Json => self.merge(Json::file(path)),
        };

        debug!(path = %path.display(), ?format, "Merged configuration file");
        Ok(self)
    }

    /// Merge the first configuration file found in the default locations.
    ///
    /// The working directory ([`DEFAULT_CONFIG_FILES`]) is searched before the
    /// platform configuration directory. Finding nothing is not an error.
    pub fn load_default_files(&mut self) -> &mut Self {
        let platform_files = directories::ProjectDirs::from("org", "physrag", "physrag")
            .map(|dirs| {
                CONFIG_EXTENSIONS
                    .iter()
                    .map(|ext| dirs.config_dir().join(format!("config.{ext}")))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let found = DEFAULT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .map(Path::to_path_buf)
            .chain(platform_files)
            .find(|path| path.is_file());

        if let Some(path) = found
            && let Err(e) = self.load_file(&path)
        {
            debug!(path = %path.display(), error = %e, "Skipped configuration file");
        }

        self
    }

    /// Merge `PHYSRAG_`-prefixed environment variables.
    ///
    /// Nested keys are separated by a double underscore, for example
    /// `PHYSRAG_RETRIEVAL__TOP_K=5`.
    pub fn load_env(&mut self) -> &mut Self {
        self.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Merge any other figment provider.
    pub fn merge<T: Provider>(&mut self, provider: T) -> &mut Self {
        self.figment = std::mem::take(&mut self.figment).merge(provider);
        self
    }

    /// Extract the merged configuration and validate it.
    pub fn extract(&self) -> Result<PhysragConfig> {
        let config: PhysragConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
