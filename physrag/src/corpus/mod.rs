//! Corpus loading and persistence
//!
//! The corpus store is a UTF-8 JSON file holding either a bare list of chunk
//! records or an object with a `chunks` field holding that list. Loading never
//! fails: a missing, unreadable or malformed store is replaced by the built-in
//! corpus, which is then written back so later runs find it.

mod defaults;

pub use defaults::default_corpus;

use crate::models::{Corpus, KnowledgeChunk};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default location of the corpus store, relative to the working directory
pub const DEFAULT_CORPUS_PATH: &str = "data/rag_knowledge_base.json";

/// Error type for corpus store operations
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The store does not exist
    #[error("Knowledge base file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The store exists but could not be read
    #[error("Failed to read knowledge base {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store could not be parsed as a chunk list
    #[error("Failed to parse knowledge base {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The corpus could not be written to the store
    #[error("Failed to write knowledge base {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus could not be serialized
    #[error("Failed to serialize knowledge base: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Accepted shapes of the corpus store
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Bare(Vec<KnowledgeChunk>),
    Wrapped {
        #[serde(default)]
        chunks: Vec<KnowledgeChunk>,
    },
}

impl From<CorpusFile> for Corpus {
    fn from(file: CorpusFile) -> Self {
        match file {
            CorpusFile::Bare(chunks) | CorpusFile::Wrapped { chunks } => Corpus::new(chunks),
        }
    }
}

/// Which path the loader took
#[derive(Debug)]
pub enum LoadOutcome {
    /// The store was read and parsed
    Loaded(Corpus),

    /// The store was unusable and the built-in corpus was substituted
    FellBackToDefault {
        corpus: Corpus,
        reason: CorpusError,
        /// Whether the built-in corpus was written back to the store
        persisted: bool,
    },
}

impl LoadOutcome {
    /// Borrow the corpus, whichever path produced it
    pub fn corpus(&self) -> &Corpus {
        match self {
            Self::Loaded(corpus) | Self::FellBackToDefault { corpus, .. } => corpus,
        }
    }

    /// Take the corpus, whichever path produced it
    pub fn into_corpus(self) -> Corpus {
        match self {
            Self::Loaded(corpus) | Self::FellBackToDefault { corpus, .. } => corpus,
        }
    }

    /// Whether the built-in corpus was substituted
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FellBackToDefault { .. })
    }

    /// Why the store was not used, if it was not
    pub fn reason(&self) -> Option<&CorpusError> {
        match self {
            Self::Loaded(_) => None,
            Self::FellBackToDefault { reason, .. } => Some(reason),
        }
    }
}

/// Loads a corpus from a store path, falling back to the built-in corpus.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    path: PathBuf,
    persist_default: bool,
}

impl CorpusLoader {
    /// Create a loader for the given store path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            persist_default: true,
        }
    }

    /// Control whether the built-in corpus is written back on fallback
    pub fn persist_default(mut self, persist: bool) -> Self {
        self.persist_default = persist;
        self
    }

    /// The store path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the corpus. Never fails; see [`LoadOutcome`].
    pub fn load(&self) -> LoadOutcome {
        match read_corpus(&self.path) {
            Ok(corpus) => {
                info!(
                    path = %self.path.display(),
                    chunks = corpus.len(),
                    "Loaded physics knowledge chunks"
                );
                LoadOutcome::Loaded(corpus)
            }
            Err(reason) => {
                warn!(path = %self.path.display(), error = %reason, "Using default knowledge base");
                let corpus = default_corpus();
                let persisted = self.persist_default && self.write_back(&corpus);
                LoadOutcome::FellBackToDefault {
                    corpus,
                    reason,
                    persisted,
                }
            }
        }
    }

    fn write_back(&self, corpus: &Corpus) -> bool {
        match write_corpus(&self.path, corpus) {
            Ok(()) => {
                info!(
                    path = %self.path.display(),
                    chunks = corpus.len(),
                    "Created default physics knowledge base"
                );
                true
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not persist default knowledge base");
                false
            }
        }
    }
}

/// Load the corpus at `path`, falling back to (and persisting) the built-in corpus.
pub fn load(path: impl AsRef<Path>) -> LoadOutcome {
    CorpusLoader::new(path).load()
}

/// Read and parse a corpus store without any fallback.
pub fn read_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CorpusError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_corpus(&contents).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse corpus store contents.
pub fn parse_corpus(contents: &str) -> Result<Corpus, serde_json::Error> {
    let file: CorpusFile = serde_json::from_str(contents)?;
    let corpus = Corpus::from(file);
    debug!(chunks = corpus.len(), "Parsed corpus store");
    Ok(corpus)
}

/// Write a corpus as an indented bare list, creating parent directories.
pub fn write_corpus(path: &Path, corpus: &Corpus) -> Result<(), CorpusError> {
    let json = serde_json::to_string_pretty(corpus)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| CorpusError::Persist {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| CorpusError::Persist {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bare_list() {
        let corpus = parse_corpus(r#"[{"chunk": "a", "subtopic": "s", "chapter": "c"}]"#).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus[0].category, "c");
    }

    #[test]
    fn test_parse_wrapped_list() {
        let corpus =
            parse_corpus(r#"{"version": 2, "chunks": [{"chunk": "a"}, {"chunk": "b"}]}"#).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_parse_object_without_chunks_is_empty() {
        let corpus = parse_corpus(r#"{"meta": "nothing here"}"#).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_corpus("42").is_err());
        assert!(parse_corpus(r#""text""#).is_err());
        assert!(parse_corpus(r#"["not an object"]"#).is_err());
        assert!(parse_corpus("{not json").is_err());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_corpus(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CorpusError::NotFound { .. }));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("kb.json");
        let corpus = Corpus::new(vec![KnowledgeChunk::new("Ω", "Units", "Electricity")]);

        write_corpus(&path, &corpus).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"chunk\": \"Ω\""));
        assert!(written.starts_with("[\n  {"));
        assert_eq!(read_corpus(&path).unwrap(), corpus);
    }

    #[test]
    fn test_fallback_without_persist_leaves_store_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.json");

        let outcome = CorpusLoader::new(&path).persist_default(false).load();

        assert!(outcome.is_fallback());
        assert!(!path.exists());
        match outcome {
            LoadOutcome::FellBackToDefault { persisted, .. } => assert!(!persisted),
            LoadOutcome::Loaded(_) => panic!("expected fallback"),
        }
    }
}
