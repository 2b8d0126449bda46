//! Domain models for the knowledge corpus

pub mod chunk;

// Re-export important models
pub use chunk::{Corpus, KnowledgeChunk, ScoredChunk};
