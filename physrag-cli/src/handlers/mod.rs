//! Command handlers for the Physrag CLI

pub mod corpus;
pub mod retrieval;

pub use corpus::{handle_diagnose_command, handle_export_command};
pub use retrieval::{
    handle_chapters_command, handle_context_command, handle_search_command, handle_topics_command,
};
