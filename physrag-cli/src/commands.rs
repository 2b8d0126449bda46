//! Command definitions
//!
//! This module contains the top-level parser and the command enum that define
//! the command structure.

use crate::args::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "physrag-cli")]
#[command(about = "Physics knowledge retrieval CLI", long_about = None)]
#[command(version = physrag::VERSION)]
pub struct Cli {
    /// Corpus store to load (overrides configuration)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Configuration file (toml, yaml or json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format - use json for tool integration
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display version information
    Version,

    /// Report where the corpus came from and what it holds
    Diagnose,

    /// Rank knowledge chunks against a query
    #[command(
        alias = "find",
        long_about = r#"
Rank the knowledge chunks against a query and show the best matches with their
relevance scores. Only chunks scoring above the relevance floor are listed.

EXAMPLES:
  physrag-cli search "Ohm's law"
  physrag-cli search "lens formula" --top-k 5 --explain
  physrag-cli --output json search "magnetic field"
"#
    )]
    Search(SearchArgs),

    /// Assemble prompt context for a query
    #[command(
        long_about = r#"
Assemble the context string that would be injected into a tutoring prompt.
Ranked chunks are rendered as labeled blocks and included while they fit the
character budget. When nothing is relevant, the fallback context is printed.

EXAMPLES:
  physrag-cli context "Ohm's law"
  physrag-cli context "refraction" --max-length 600
"#
    )]
    Context(ContextArgs),

    /// List subtopics, optionally for one chapter
    Topics(TopicsArgs),

    /// List chapters
    Chapters,

    /// Write the built-in corpus to a file
    Export(ExportArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

impl Commands {
    /// Whether the command reads the corpus
    pub fn needs_corpus(&self) -> bool {
        !matches!(
            self,
            Commands::Version | Commands::Export(_) | Commands::Completions(_)
        )
    }
}
