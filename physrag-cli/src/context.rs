use physrag::config::ConfigLoader;
use physrag::prelude::*;
use std::path::PathBuf;

pub struct PhysragCliContext {
    pub retriever: KnowledgeRetriever,
    pub config: PhysragConfig,
}

impl PhysragCliContext {
    pub fn new(corpus: Option<PathBuf>, config_file: Option<PathBuf>) -> physrag::Result<Self> {
        let mut loader = ConfigLoader::new();
        loader.load_default_files();
        if let Some(file) = config_file {
            loader.load_file(file)?;
        }
        let mut config = loader.load_env().extract()?;

        if let Some(path) = corpus {
            config.corpus.path = path;
        }

        Self::from_config(config)
    }

    pub fn from_config(config: PhysragConfig) -> physrag::Result<Self> {
        let retriever = physrag::init(config.clone())?;
        Ok(Self { retriever, config })
    }
}
