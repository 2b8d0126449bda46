//! Knowledge chunk model representing one labeled passage of the corpus

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Index;
use std::slice;

/// A short passage of domain knowledge tagged with a subtopic and a chapter.
///
/// On disk the fields are named `chunk`, `subtopic` and `chapter`. Missing or
/// `null` fields deserialize to the empty string so that every record in a
/// corpus store can be scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KnowledgeChunk {
    /// Body of knowledge (free text, may contain symbols and formulas)
    #[serde(rename = "chunk", default, deserialize_with = "string_or_empty")]
    pub text: String,

    /// Short label naming the specific concept
    #[serde(default, deserialize_with = "string_or_empty")]
    pub subtopic: String,

    /// Broader grouping label, typically a syllabus chapter
    #[serde(rename = "chapter", default, deserialize_with = "string_or_empty")]
    pub category: String,
}

impl KnowledgeChunk {
    /// Create a new chunk from its three labels
    pub fn new(
        text: impl Into<String>,
        subtopic: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            subtopic: subtopic.into(),
            category: category.into(),
        }
    }

    /// A chunk is usable for retrieval when its body is non-empty
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty()
    }

    /// Render the chunk as a labeled context block for prompt injection.
    pub fn to_context_block(&self) -> String {
        format!(
            "📚 **{}** - {}:\n{}\n",
            self.category, self.subtopic, self.text
        )
    }
}

impl fmt::Display for KnowledgeChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.subtopic)
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered, immutable collection of knowledge chunks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Corpus {
    chunks: Vec<KnowledgeChunk>,
}

impl Corpus {
    /// Create a corpus from chunks, preserving their order
    pub fn new(chunks: Vec<KnowledgeChunk>) -> Self {
        Self { chunks }
    }

    /// Create an empty corpus
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the corpus holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterate over chunks in corpus order
    pub fn iter(&self) -> slice::Iter<'_, KnowledgeChunk> {
        self.chunks.iter()
    }

    /// Borrow the chunks as a slice
    pub fn chunks(&self) -> &[KnowledgeChunk] {
        &self.chunks
    }

    /// Whether the given chunk is part of this corpus
    pub fn contains(&self, chunk: &KnowledgeChunk) -> bool {
        self.chunks.iter().any(|c| c == chunk)
    }
}

impl From<Vec<KnowledgeChunk>> for Corpus {
    fn from(chunks: Vec<KnowledgeChunk>) -> Self {
        Self::new(chunks)
    }
}

impl FromIterator<KnowledgeChunk> for Corpus {
    fn from_iter<I: IntoIterator<Item = KnowledgeChunk>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Corpus {
    type Output = KnowledgeChunk;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chunks[index]
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a KnowledgeChunk;
    type IntoIter = slice::Iter<'a, KnowledgeChunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

/// A chunk paired with its relevance score for a single query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredChunk<'a> {
    /// The scored chunk, borrowed from the corpus
    pub chunk: &'a KnowledgeChunk,

    /// Total relevance score (higher is more relevant)
    pub score: f64,
}
