//! Knowledge retriever: ranking and context assembly over a loaded corpus

use crate::config::{PhysragConfig, RetrievalConfig};
use crate::corpus::{CorpusLoader, LoadOutcome};
use crate::models::{Corpus, KnowledgeChunk, ScoredChunk};
use crate::queries::ContextQuery;
use crate::search::{ScoreCalculator, tokenize};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace};

/// Where the retriever's corpus came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusSource {
    /// Read from the corpus store
    Loaded { path: PathBuf },

    /// Built-in corpus substituted for an unusable store
    Default {
        path: PathBuf,
        reason: String,
        persisted: bool,
    },

    /// Supplied directly by the caller
    InMemory,
}

impl CorpusSource {
    fn from_outcome(path: PathBuf, outcome: &LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded(_) => Self::Loaded { path },
            LoadOutcome::FellBackToDefault {
                reason, persisted, ..
            } => Self::Default {
                path,
                reason: reason.to_string(),
                persisted: *persisted,
            },
        }
    }

    /// Whether the built-in corpus is in use because the store was unusable
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Default { .. })
    }
}

/// Selects relevant knowledge chunks for a query and assembles them into
/// prompt context.
///
/// The corpus is shared and never mutated after construction, so clones of a
/// retriever can serve concurrent callers without locking. Each call allocates
/// its own scored list.
///
/// # Example
///
/// ```no_run
/// use physrag::core::KnowledgeRetriever;
/// use physrag::corpus::default_corpus;
///
/// let retriever = KnowledgeRetriever::new(default_corpus());
/// let context = retriever.get_context("Ohm's law", 1200);
/// println!("{context}");
/// ```
#[derive(Debug, Clone)]
pub struct KnowledgeRetriever {
    corpus: Arc<Corpus>,
    calculator: ScoreCalculator,
    config: RetrievalConfig,
    source: CorpusSource,
}

impl KnowledgeRetriever {
    /// Create a retriever over an in-memory corpus with default settings
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus: Arc::new(corpus),
            calculator: ScoreCalculator::default(),
            config: RetrievalConfig::default(),
            source: CorpusSource::InMemory,
        }
    }

    /// Create a retriever over an in-memory corpus with custom settings
    pub fn with_config(corpus: Corpus, config: RetrievalConfig) -> crate::Result<Self> {
        let calculator = ScoreCalculator::try_new(config.scoring.clone())
            .map_err(crate::PhysragError::Configuration)?;
        Ok(Self {
            corpus: Arc::new(corpus),
            calculator,
            config,
            source: CorpusSource::InMemory,
        })
    }

    /// Load the corpus store named by the configuration and build a retriever.
    ///
    /// Corpus problems never fail this call; they select the built-in corpus
    /// and are reported through [`KnowledgeRetriever::source`].
    pub fn open(config: &PhysragConfig) -> crate::Result<Self> {
        let outcome = CorpusLoader::new(&config.corpus.path)
            .persist_default(config.corpus.persist_default)
            .load();
        let source = CorpusSource::from_outcome(config.corpus.path.clone(), &outcome);

        let mut retriever = Self::with_config(outcome.into_corpus(), config.retrieval.clone())?;
        retriever.source = source;
        Ok(retriever)
    }

    /// Build a retriever from a loader outcome
    pub fn from_outcome(path: impl Into<PathBuf>, outcome: LoadOutcome) -> Self {
        let source = CorpusSource::from_outcome(path.into(), &outcome);
        let mut retriever = Self::new(outcome.into_corpus());
        retriever.source = source;
        retriever
    }

    /// The loaded corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Where the corpus came from
    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    /// The retrieval settings in use
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// The calculator used for ranking
    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Score every chunk and return those above the relevance floor, best
    /// first, at most `top_k` of them.
    ///
    /// Equal scores keep corpus order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<ScoredChunk<'_>> {
        if self.corpus.is_empty() {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();
        let tokens = tokenize(&query_lower);
        let scoring = self.calculator.config();

        let mut scored: Vec<ScoredChunk<'_>> = self
            .corpus
            .iter()
            .filter_map(|chunk| {
                let score = self
                    .calculator
                    .breakdown_prepared(&query_lower, &tokens, chunk)
                    .total();
                trace!(subtopic = %chunk.subtopic, score, "Scored chunk");
                scoring
                    .is_relevant(score)
                    .then_some(ScoredChunk { chunk, score })
            })
            .collect();

        let candidates = scored.len();
        // sort_by is stable, which keeps corpus order among ties
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);

        debug!(
            query,
            candidates,
            returned = scored.len(),
            "Ranked knowledge chunks"
        );
        scored
    }

    /// The `top_k` most relevant chunks for a query, best first.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<&KnowledgeChunk> {
        self.search(query, top_k)
            .into_iter()
            .map(|scored| scored.chunk)
            .collect()
    }

    /// Assemble prompt context for a query within `max_length` characters.
    ///
    /// Ranked chunks are rendered as labeled blocks and taken in order while
    /// they fit; the first block that would overflow ends assembly. Blocks are
    /// joined by newlines that do not count against the budget. When nothing is
    /// relevant, the configured fallback text is returned instead.
    pub fn get_context(&self, query: &str, max_length: usize) -> String {
        let chunks = self.retrieve(query, self.config.top_k);
        if chunks.is_empty() {
            return self.config.fallback_context.clone();
        }

        let mut parts = Vec::with_capacity(chunks.len());
        let mut current_length = 0;
        for chunk in chunks {
            let block = chunk.to_context_block();
            let block_length = block.chars().count();
            if current_length + block_length > max_length {
                break;
            }
            current_length += block_length;
            parts.push(block);
        }

        debug!(
            query,
            blocks = parts.len(),
            length = current_length,
            "Assembled context"
        );
        parts.join("\n")
    }

    /// Assemble context with the configured character budget
    pub fn context(&self, query: &str) -> String {
        self.get_context(query, self.config.max_context_length)
    }

    /// Assemble context for a host-application request
    pub fn context_for(&self, query: &ContextQuery) -> String {
        self.context(&query.to_query_string())
    }

    /// Distinct non-empty subtopics.
    ///
    /// With no category (or an empty one), every subtopic in the corpus, in
    /// sorted order. Otherwise the subtopics of chunks whose chapter contains
    /// `category` case-insensitively, in first-seen order.
    pub fn chapter_topics(&self, category: Option<&str>) -> Vec<String> {
        match category {
            Some(category) if !category.is_empty() => {
                let needle = category.to_lowercase();
                let mut seen = HashSet::new();
                self.corpus
                    .iter()
                    .filter(|chunk| chunk.category.to_lowercase().contains(&needle))
                    .map(|chunk| chunk.subtopic.as_str())
                    .filter(|topic| !topic.is_empty() && seen.insert(*topic))
                    .map(str::to_string)
                    .collect()
            }
            _ => self.all_topics().into_iter().collect(),
        }
    }

    /// The set of distinct non-empty subtopics across the corpus
    pub fn all_topics(&self) -> BTreeSet<String> {
        self.corpus
            .iter()
            .filter(|chunk| !chunk.subtopic.is_empty())
            .map(|chunk| chunk.subtopic.clone())
            .collect()
    }

    /// Distinct non-empty chapters in first-seen order
    pub fn chapters(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.corpus
            .iter()
            .map(|chunk| chunk.category.as_str())
            .filter(|category| !category.is_empty() && seen.insert(*category))
            .map(str::to_string)
            .collect()
    }
}

impl From<Corpus> for KnowledgeRetriever {
    fn from(corpus: Corpus) -> Self {
        Self::new(corpus)
    }
}
