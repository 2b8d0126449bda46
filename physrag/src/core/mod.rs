//! Core retrieval API

mod retriever;

pub use retriever::{CorpusSource, KnowledgeRetriever};
