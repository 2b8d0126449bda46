//! Integration tests for Physrag CLI
//!
//! These tests verify CLI command functionality including:
//! - Argument parsing for every command
//! - Search, context and topic listing against a real corpus store
//! - Diagnostics for loaded and fallback corpora
//! - Exporting the built-in corpus

use clap::Parser;
use physrag::config::ConfigBuilder;
use physrag::prelude::*;
use physrag_cli::args::{ContextArgs, ExportArgs, SearchArgs, TopicsArgs};
use physrag_cli::handlers::corpus::{diagnose, export_default_corpus};
use physrag_cli::handlers::retrieval::{assemble_context, list_topics, search_hits};
use physrag_cli::{Cli, Commands, OutputFormat, PhysragCliContext};
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated test CLI context over a fresh store path
fn create_test_context() -> (PhysragCliContext, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let corpus_path = temp_dir.path().join("data").join("rag_knowledge_base.json");

    let config = ConfigBuilder::new()
        .with_corpus_path(&corpus_path)
        .build()
        .expect("Failed to build config");

    let context = PhysragCliContext::from_config(config).expect("Failed to initialize Physrag");
    (context, temp_dir)
}

fn search_args(query: &str, top_k: Option<usize>, explain: bool) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        top_k,
        explain,
    }
}

#[test]
fn test_parse_search_command() {
    let cli = Cli::try_parse_from([
        "physrag-cli",
        "--output",
        "json",
        "search",
        "Ohm's law",
        "--top-k",
        "5",
    ])
    .unwrap();

    assert_eq!(cli.output, OutputFormat::Json);
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "Ohm's law");
            assert_eq!(args.top_k, Some(5));
            assert!(!args.explain);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn test_parse_global_flags_after_command() {
    let cli = Cli::try_parse_from([
        "physrag-cli",
        "context",
        "refraction",
        "--max-length",
        "600",
        "--corpus",
        "kb.json",
        "--verbose",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.corpus.as_deref(), Some(std::path::Path::new("kb.json")));
    assert!(cli.command.needs_corpus());
    match cli.command {
        Commands::Context(args) => assert_eq!(args.max_length, Some(600)),
        _ => panic!("expected context command"),
    }
}

#[test]
fn test_parse_rejects_conflicting_verbosity() {
    assert!(Cli::try_parse_from(["physrag-cli", "-v", "-q", "chapters"]).is_err());
    assert!(Cli::try_parse_from(["physrag-cli", "--output", "xml", "chapters"]).is_err());
}

#[test]
fn test_commands_without_corpus() {
    for argv in [
        vec!["physrag-cli", "version"],
        vec!["physrag-cli", "export", "out.json"],
        vec!["physrag-cli", "completions", "bash"],
    ] {
        let cli = Cli::try_parse_from(argv).unwrap();
        assert!(!cli.command.needs_corpus());
    }
}

#[test]
fn test_search_ranks_ohms_law_first() {
    let (ctx, _temp_dir) = create_test_context();

    let hits = search_hits(&ctx, &search_args("Ohm's law", None, false));
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].rank, 1);
    assert_eq!(hits[0].subtopic, "Ohm's Law");
    assert_eq!(hits[0].chapter, "Electricity");
    assert!(hits.iter().all(|hit| hit.breakdown.is_none()));
}

#[test]
fn test_search_explain_matches_score() {
    let (ctx, _temp_dir) = create_test_context();

    let hits = search_hits(&ctx, &search_args("magnetic field", Some(2), true));
    assert_eq!(hits.len(), 2);
    for hit in hits {
        let breakdown = hit.breakdown.expect("breakdown requested");
        assert!((breakdown.total() - hit.score).abs() < 1e-12);
    }
}

#[test]
fn test_search_json_shape() {
    let (ctx, _temp_dir) = create_test_context();

    let hits = search_hits(&ctx, &search_args("electric power", Some(1), false));
    let value = serde_json::to_value(&hits).unwrap();
    assert_eq!(value[0]["subtopic"], "Electric Power");
    assert!(value[0].get("breakdown").is_none());
    assert!(value[0]["score"].as_f64().unwrap() > 0.1);
}

#[test]
fn test_context_budget() {
    let (ctx, _temp_dir) = create_test_context();

    let full = assemble_context(
        &ctx,
        &ContextArgs {
            query: "Ohm's law".to_string(),
            max_length: None,
        },
    );
    assert_eq!(full.matches("📚").count(), 3);

    let tight = assemble_context(
        &ctx,
        &ContextArgs {
            query: "Ohm's law".to_string(),
            max_length: Some(300),
        },
    );
    assert!(tight.is_empty());

    let fallback = assemble_context(
        &ctx,
        &ContextArgs {
            query: "zzz".to_string(),
            max_length: None,
        },
    );
    assert_eq!(fallback, "Physics concepts from Class 10 curriculum.");
}

#[test]
fn test_topics() {
    let (ctx, _temp_dir) = create_test_context();

    let all = list_topics(&ctx, &TopicsArgs { chapter: None });
    assert_eq!(all.len(), 17);
    assert!(all.windows(2).all(|w| w[0] <= w[1]));

    let electricity = list_topics(
        &ctx,
        &TopicsArgs {
            chapter: Some("electricity".to_string()),
        },
    );
    assert_eq!(electricity.first().map(String::as_str), Some("Electric Current"));
    assert_eq!(electricity.len(), 6);
}

#[test]
fn test_diagnose_reports_fallback_then_loaded() {
    let (ctx, temp_dir) = create_test_context();

    let first = diagnose(&ctx);
    assert!(first.source.is_fallback());
    assert_eq!(first.chunks, 17);
    assert_eq!(first.topics, 17);
    let counts: Vec<usize> = first.chapters.iter().map(|c| c.chunks).collect();
    assert_eq!(counts, vec![7, 6, 4]);

    let config = ConfigBuilder::new()
        .with_corpus_path(temp_dir.path().join("data").join("rag_knowledge_base.json"))
        .build()
        .unwrap();
    let reopened = PhysragCliContext::from_config(config).unwrap();
    let second = diagnose(&reopened);
    assert!(!second.source.is_fallback());
    assert_eq!(second.chunks, 17);

    let value = serde_json::to_value(&second).unwrap();
    assert_eq!(value["source"]["kind"], "loaded");
}

#[test]
fn test_context_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let corpus_path = temp_dir.path().join("kb.json");
    fs::write(
        &corpus_path,
        r#"[{"chunk": "Sound needs a medium.", "subtopic": "Sound Waves", "chapter": "Sound"}]"#,
    )
    .unwrap();

    let config_path = temp_dir.path().join("physrag.toml");
    fs::write(
        &config_path,
        format!(
            "[corpus]\npath = {:?}\npersist_default = false\n\n[retrieval]\ntop_k = 1\n",
            corpus_path.display().to_string()
        ),
    )
    .unwrap();

    let ctx = PhysragCliContext::new(None, Some(config_path)).unwrap();
    assert_eq!(ctx.config.retrieval.top_k, 1);
    assert_eq!(ctx.retriever.chapters(), vec!["Sound"]);
}

#[test]
fn test_corpus_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let corpus_path = temp_dir.path().join("override.json");
    fs::write(&corpus_path, "[]").unwrap();

    let ctx = PhysragCliContext::new(Some(corpus_path.clone()), None).unwrap();
    assert_eq!(ctx.config.corpus.path, corpus_path);
    assert!(ctx.retriever.corpus().is_empty());
}

#[test]
fn test_export_default_corpus() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export").join("kb.json");

    let args = ExportArgs {
        path: path.clone(),
        force: false,
    };
    assert_eq!(export_default_corpus(&args).unwrap(), 17);
    assert_eq!(
        physrag::corpus::read_corpus(&path).unwrap(),
        default_corpus()
    );

    assert!(export_default_corpus(&args).is_err());

    let forced = ExportArgs { path, force: true };
    assert_eq!(export_default_corpus(&forced).unwrap(), 17);
}
