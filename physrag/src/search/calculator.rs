//! Chunk relevance calculator
//!
//! Combines string similarity between the query and each chunk field with a
//! keyword-overlap bonus to produce a single relevance score.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::matcher::similarity;
use super::scoring::ScoringConfig;
use crate::models::KnowledgeChunk;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"[\p{L}\p{N}_]+").unwrap();
}

/// Split text into word tokens: maximal runs of alphanumeric or `_` characters.
///
/// Combining marks (such as Devanagari vowel signs) are not word characters
/// and split tokens.
///
/// Duplicates are kept, in query order.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Per-component breakdown of a chunk's score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Weighted query/body similarity
    pub content: f64,
    /// Weighted query/subtopic similarity
    pub subtopic: f64,
    /// Weighted query/chapter similarity
    pub category: f64,
    /// Keyword bonus after the cap
    pub keyword: f64,
}

impl ScoreBreakdown {
    /// Total relevance score
    pub fn total(&self) -> f64 {
        self.content + self.subtopic + self.category + self.keyword
    }
}

/// Calculator for scoring chunks against a query
///
/// Scoring is a pure function of the query, the chunk and the configuration.
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Create a calculator, returning an error if the configuration is invalid
    pub fn try_new(config: ScoringConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a chunk against a raw (not yet lowercased) query.
    pub fn score(&self, query: &str, chunk: &KnowledgeChunk) -> f64 {
        self.breakdown(query, chunk).total()
    }

    /// Score a chunk against a query and report each component.
    pub fn breakdown(&self, query: &str, chunk: &KnowledgeChunk) -> ScoreBreakdown {
        let query = query.to_lowercase();
        let tokens = tokenize(&query);
        self.breakdown_prepared(&query, &tokens, chunk)
    }

    /// Score with a query that is already lowercased and tokenized.
    ///
    /// Lets callers ranking a whole corpus prepare the query once.
    pub(crate) fn breakdown_prepared(
        &self,
        query: &str,
        tokens: &[&str],
        chunk: &KnowledgeChunk,
    ) -> ScoreBreakdown {
        let text = chunk.text.to_lowercase();
        let subtopic = chunk.subtopic.to_lowercase();
        let category = chunk.category.to_lowercase();

        let content = similarity(query, &text) * self.config.content_weight;
        let subtopic_score = similarity(query, &subtopic) * self.config.subtopic_weight;
        let category_score = similarity(query, &category) * self.config.category_weight;

        let mut keyword = 0.0;
        for token in tokens {
            if text.contains(token) || subtopic.contains(token) || category.contains(token) {
                keyword += self.config.keyword_bonus;
            }
        }

        ScoreBreakdown {
            content,
            subtopic: subtopic_score,
            category: category_score,
            keyword: keyword.min(self.config.keyword_cap),
        }
    }
}
