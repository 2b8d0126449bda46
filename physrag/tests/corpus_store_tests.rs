//! Integration tests for the corpus store
//!
//! These tests verify loading, fallback and write-back behavior against real
//! files in temporary directories.

use physrag::config::ConfigBuilder;
use physrag::corpus::{CorpusError, read_corpus};
use physrag::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_store_is_created_from_default() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("data").join("rag_knowledge_base.json");

    let outcome = CorpusLoader::new(&path).load();
    assert!(outcome.is_fallback());
    assert!(matches!(outcome.reason(), Some(CorpusError::NotFound { .. })));
    assert_eq!(outcome.corpus(), &default_corpus());
    assert!(path.exists());

    let reloaded = CorpusLoader::new(&path).load();
    assert!(!reloaded.is_fallback());
    assert_eq!(reloaded.into_corpus(), default_corpus());
}

#[test]
fn test_store_round_trip_after_deletion() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.json");

    let first = CorpusLoader::new(&path).load().into_corpus();
    fs::remove_file(&path).unwrap();

    let second = CorpusLoader::new(&path).load();
    assert!(second.is_fallback());
    assert!(path.exists());
    assert_eq!(second.into_corpus(), first);
    assert_eq!(read_corpus(&path).unwrap(), first);
}

#[test]
fn test_written_store_uses_record_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.json");
    CorpusLoader::new(&path).load();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = value.as_array().expect("store should be a bare list");
    assert_eq!(records.len(), 17);
    assert_eq!(records[9]["subtopic"], "Ohm's Law");
    assert_eq!(records[9]["chapter"], "Electricity");
    assert!(records[9]["chunk"].as_str().unwrap().contains("V = I × R"));
}

#[test]
fn test_custom_store_is_used_as_is() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.json");
    fs::write(
        &path,
        r#"{"chunks": [
            {"chunk": "Sound needs a medium.", "subtopic": "Sound Waves", "chapter": "Sound"},
            {"chunk": "Echo is reflected sound.", "subtopic": "Echo", "chapter": "Sound", "extra": 1}
        ]}"#,
    )
    .unwrap();

    let config = ConfigBuilder::testing().with_corpus_path(&path).build().unwrap();
    let retriever = KnowledgeRetriever::open(&config).unwrap();

    assert!(!retriever.source().is_fallback());
    assert_eq!(retriever.corpus().len(), 2);
    assert_eq!(retriever.retrieve("echo", 1)[0].subtopic, "Echo");
    assert_eq!(retriever.chapters(), vec!["Sound"]);
}

#[test]
fn test_malformed_store_falls_back_without_overwrite_when_disabled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.json");
    fs::write(&path, "{ not json").unwrap();

    let config = ConfigBuilder::testing().with_corpus_path(&path).build().unwrap();
    let retriever = KnowledgeRetriever::open(&config).unwrap();

    match retriever.source() {
        CorpusSource::Default {
            reason, persisted, ..
        } => {
            assert!(reason.contains("parse"));
            assert!(!persisted);
        }
        other => panic!("expected fallback, got {other:?}"),
    }
    assert_eq!(retriever.corpus().len(), 17);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_malformed_store_is_replaced_when_persisting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let outcome = CorpusLoader::new(&path).persist_default(true).load();
    match &outcome {
        LoadOutcome::FellBackToDefault { persisted, .. } => assert!(persisted),
        LoadOutcome::Loaded(_) => panic!("expected fallback"),
    }
    assert_eq!(read_corpus(&path).unwrap(), default_corpus());
}

#[test]
fn test_failed_write_back_still_serves_default() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "plain file").unwrap();
    let path = blocker.join("kb.json");

    let outcome = CorpusLoader::new(&path).persist_default(true).load();
    match &outcome {
        LoadOutcome::FellBackToDefault { persisted, .. } => assert!(!persisted),
        LoadOutcome::Loaded(_) => panic!("expected fallback"),
    }
    assert_eq!(outcome.corpus(), &default_corpus());
    assert!(!path.exists());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "plain file");
}

#[test]
fn test_empty_store_gives_empty_corpus() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.json");
    fs::write(&path, "[]").unwrap();

    let retriever = KnowledgeRetriever::open(
        &ConfigBuilder::testing().with_corpus_path(&path).build().unwrap(),
    )
    .unwrap();

    assert!(retriever.corpus().is_empty());
    assert!(retriever.retrieve("light", 3).is_empty());
    assert_eq!(
        retriever.context("light"),
        "Physics concepts from Class 10 curriculum."
    );
    assert!(retriever.all_topics().is_empty());
}

#[test]
fn test_init_loads_configured_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("kb.json");

    let config = ConfigBuilder::new()
        .with_corpus_path(&path)
        .with_top_k(2)
        .build()
        .unwrap();
    let retriever = physrag::init(config).unwrap();

    assert!(retriever.source().is_fallback());
    assert!(path.exists());
    assert_eq!(retriever.config().top_k, 2);
    assert_eq!(retriever.context("Ohm's law").matches("📚").count(), 2);
}
