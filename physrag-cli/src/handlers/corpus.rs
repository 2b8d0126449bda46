//! Corpus command handlers

use crate::args::ExportArgs;
use crate::commands::OutputFormat;
use crate::context::PhysragCliContext;
use crate::output::*;
use physrag::PhysragError;
use physrag::corpus::{default_corpus, write_corpus};
use physrag::prelude::CorpusSource;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Chunk count for one chapter
#[derive(Debug, Serialize)]
pub struct ChapterSummary {
    pub name: String,
    pub chunks: usize,
}

/// Corpus health report
#[derive(Debug, Serialize)]
pub struct Diagnosis {
    pub version: &'static str,
    pub corpus_path: PathBuf,
    pub source: CorpusSource,
    pub chunks: usize,
    pub topics: usize,
    pub chapters: Vec<ChapterSummary>,
}

pub fn diagnose(ctx: &PhysragCliContext) -> Diagnosis {
    let retriever = &ctx.retriever;
    let corpus = retriever.corpus();

    let chapters = retriever
        .chapters()
        .into_iter()
        .map(|name| ChapterSummary {
            chunks: corpus.iter().filter(|c| c.category == name).count(),
            name,
        })
        .collect();

    Diagnosis {
        version: physrag::VERSION,
        corpus_path: ctx.config.corpus.path.clone(),
        source: retriever.source().clone(),
        chunks: corpus.len(),
        topics: retriever.all_topics().len(),
        chapters,
    }
}

pub fn handle_diagnose_command(
    ctx: &PhysragCliContext,
    output_format: OutputFormat,
) -> physrag::Result<()> {
    info!("Running diagnostic checks...");
    let diagnosis = diagnose(ctx);

    match output_format {
        OutputFormat::Json => print_json(&diagnosis),
        OutputFormat::Text => print_diagnosis(&diagnosis),
    }

    Ok(())
}

/// Write the built-in corpus to `args.path`, returning the chunk count
pub fn export_default_corpus(args: &ExportArgs) -> physrag::Result<usize> {
    if args.path.exists() && !args.force {
        return Err(PhysragError::Other(format!(
            "{} already exists; pass --force to overwrite",
            args.path.display()
        )));
    }

    let corpus = default_corpus();
    write_corpus(&args.path, &corpus)?;
    Ok(corpus.len())
}

pub fn handle_export_command(args: ExportArgs, output_format: OutputFormat) -> physrag::Result<()> {
    let chunks = export_default_corpus(&args)?;

    match output_format {
        OutputFormat::Json => print_json(&json!({
            "path": args.path,
            "chunks": chunks,
        })),
        OutputFormat::Text => println!(
            "{}",
            format_success(&format!(
                "Wrote {} chunks to {}",
                chunks,
                args.path.display()
            ))
        ),
    }

    Ok(())
}
