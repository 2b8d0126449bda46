//! Command argument structures
//!
//! This module contains the CLI argument structs for each command.

use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (defaults to the configured top_k)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Show per-component score breakdown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args)]
pub struct ContextArgs {
    /// Query to assemble context for
    pub query: String,

    /// Character budget (defaults to the configured max_context_length)
    #[arg(short, long)]
    pub max_length: Option<usize>,
}

#[derive(Args)]
pub struct TopicsArgs {
    /// Only list subtopics of chapters containing this text (case-insensitive)
    #[arg(short, long)]
    pub chapter: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file for the built-in corpus
    pub path: PathBuf,

    /// Overwrite the destination if it exists
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    Power,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::Power => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
