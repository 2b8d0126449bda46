//! Retrieval command handlers

use crate::args::*;
use crate::commands::OutputFormat;
use crate::context::PhysragCliContext;
use crate::output::*;
use physrag::search::ScoreBreakdown;
use serde::Serialize;
use serde_json::json;

/// One ranked chunk as reported by `search`
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub score: f64,
    pub subtopic: String,
    pub chapter: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Rank the corpus against the query
pub fn search_hits(ctx: &PhysragCliContext, args: &SearchArgs) -> Vec<SearchHit> {
    let retriever = &ctx.retriever;
    let top_k = args.top_k.unwrap_or(retriever.config().top_k);

    retriever
        .search(&args.query, top_k)
        .into_iter()
        .enumerate()
        .map(|(i, scored)| SearchHit {
            rank: i + 1,
            score: scored.score,
            subtopic: scored.chunk.subtopic.clone(),
            chapter: scored.chunk.category.clone(),
            text: scored.chunk.text.clone(),
            breakdown: args
                .explain
                .then(|| retriever.calculator().breakdown(&args.query, scored.chunk)),
        })
        .collect()
}

pub fn handle_search_command(
    args: SearchArgs,
    ctx: &PhysragCliContext,
    output_format: OutputFormat,
) -> physrag::Result<()> {
    let hits = search_hits(ctx, &args);

    match output_format {
        OutputFormat::Json => print_json(&json!({
            "query": args.query,
            "results": hits,
        })),
        OutputFormat::Text => print_search_hits(&args.query, &hits),
    }

    Ok(())
}

/// Assemble the context string for the query
pub fn assemble_context(ctx: &PhysragCliContext, args: &ContextArgs) -> String {
    let max_length = args
        .max_length
        .unwrap_or(ctx.retriever.config().max_context_length);
    ctx.retriever.get_context(&args.query, max_length)
}

pub fn handle_context_command(
    args: ContextArgs,
    ctx: &PhysragCliContext,
    output_format: OutputFormat,
) -> physrag::Result<()> {
    let context = assemble_context(ctx, &args);

    match output_format {
        OutputFormat::Json => print_json(&json!({
            "query": args.query,
            "length": context.chars().count(),
            "context": context,
        })),
        OutputFormat::Text => {
            if context.is_empty() {
                eprintln!(
                    "{}",
                    format_warning("No block fits within the character budget.")
                );
            } else {
                println!("{context}");
            }
        }
    }

    Ok(())
}

/// Subtopics, for one chapter or all of them
pub fn list_topics(ctx: &PhysragCliContext, args: &TopicsArgs) -> Vec<String> {
    ctx.retriever.chapter_topics(args.chapter.as_deref())
}

pub fn handle_topics_command(
    args: TopicsArgs,
    ctx: &PhysragCliContext,
    output_format: OutputFormat,
) -> physrag::Result<()> {
    let topics = list_topics(ctx, &args);

    match output_format {
        OutputFormat::Json => print_json(&json!({
            "chapter": args.chapter,
            "topics": topics,
        })),
        OutputFormat::Text => {
            let heading = match &args.chapter {
                Some(chapter) if !chapter.is_empty() => format!("Topics matching '{chapter}'"),
                _ => "All topics".to_string(),
            };
            print_name_list(&heading, &topics);
        }
    }

    Ok(())
}

pub fn handle_chapters_command(
    ctx: &PhysragCliContext,
    output_format: OutputFormat,
) -> physrag::Result<()> {
    let chapters = ctx.retriever.chapters();

    match output_format {
        OutputFormat::Json => print_json(&json!({ "chapters": chapters })),
        OutputFormat::Text => print_name_list("Chapters", &chapters),
    }

    Ok(())
}
