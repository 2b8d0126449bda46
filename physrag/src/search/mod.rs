//! Relevance scoring module
//!
//! Scores knowledge chunks against free-text queries by blending
//! longest-matching-blocks similarity with keyword overlap.
//!
//! # Overview
//!
//! For a query `q` and a chunk, with every string lowercased:
//! - content: `similarity(q, text) * 1.0`
//! - subtopic: `similarity(q, subtopic) * 1.5`
//! - chapter: `similarity(q, chapter) * 1.2`
//! - keywords: `0.3` per query token found in any field, capped at `1.0`
//!
//! # Example
//!
//! ```no_run
//! use physrag::models::KnowledgeChunk;
//! use physrag::search::ScoreCalculator;
//!
//! let calculator = ScoreCalculator::default();
//! let chunk = KnowledgeChunk::new("V = I × R", "Ohm's Law", "Electricity");
//! let score = calculator.score("ohm's law", &chunk);
//! assert!(score > 0.1);
//! ```

pub mod calculator;
pub mod matcher;
pub mod scoring;

pub use calculator::{ScoreBreakdown, ScoreCalculator, tokenize};
pub use matcher::{SequenceMatcher, similarity};
pub use scoring::ScoringConfig;
