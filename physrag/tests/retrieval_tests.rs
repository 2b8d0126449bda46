//! Integration tests for ranking and context assembly
//!
//! These tests exercise the retriever over the built-in corpus:
//! - Ranking order for representative student queries
//! - Result bounds, relevance floor and ordering guarantees
//! - Context budget handling and the fallback context
//! - Topic listing and concurrent use

use physrag::prelude::*;
use std::collections::HashSet;

fn retriever() -> KnowledgeRetriever {
    KnowledgeRetriever::new(default_corpus())
}

fn subtopics(chunks: &[&KnowledgeChunk]) -> Vec<String> {
    chunks.iter().map(|c| c.subtopic.clone()).collect()
}

#[test]
fn test_ohms_law_ranks_first() {
    let retriever = retriever();
    let results = retriever.search("Ohm's law", 3);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].chunk.subtopic, "Ohm's Law");
    assert!((results[0].score - 2.5829).abs() < 1e-3);

    let magnetic_field = retriever
        .search("Ohm's law", 17)
        .into_iter()
        .find(|r| r.chunk.subtopic == "Magnetic Field")
        .expect("magnetic field should clear the floor");
    assert!(results[0].score > magnetic_field.score);
}

#[test]
fn test_representative_queries() {
    let retriever = retriever();

    assert_eq!(
        subtopics(&retriever.retrieve("magnetic field", 3)),
        vec![
            "Magnetic Field",
            "Magnetic Field due to Current",
            "Electromagnetic Induction"
        ]
    );
    assert_eq!(
        subtopics(&retriever.retrieve("electric power", 3)),
        vec!["Electric Power", "Electric Potential", "Electric Current"]
    );
    assert_eq!(
        subtopics(&retriever.retrieve("lens formula", 3)),
        vec!["Lens Formula and Human Eye", "Mirror Formula", "Lenses"]
    );
    assert_eq!(
        subtopics(&retriever.retrieve("refraction", 3)),
        vec!["Refraction of Light", "Reflection of Light", "Mirror Formula"]
    );
}

#[test]
fn test_results_are_bounded_sorted_and_above_floor() {
    let retriever = retriever();

    for query in ["light", "current", "Ohm's law", "what is a magnet", "x"] {
        for top_k in [0, 1, 3, 17, 50] {
            let results = retriever.search(query, top_k);
            assert!(results.len() <= top_k);
            assert!(results.iter().all(|r| r.score > 0.1));
            assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
            assert!(results.iter().all(|r| retriever.corpus().contains(r.chunk)));
        }
    }
}

#[test]
fn test_ties_keep_corpus_order() {
    let chunk = KnowledgeChunk::new("Same body", "Same topic", "Same chapter");
    let corpus = Corpus::new(vec![chunk.clone(), chunk.clone(), chunk]);
    let retriever = KnowledgeRetriever::new(corpus);

    let results = retriever.search("same topic", 3);
    assert_eq!(results.len(), 3);
    for (i, result) in results.iter().enumerate() {
        assert!(std::ptr::eq(result.chunk, &retriever.corpus()[i]));
    }
}

#[test]
fn test_unmatched_query_yields_fallback() {
    let retriever = retriever();

    assert!(retriever.retrieve("zzz", 3).is_empty());
    assert!(retriever.retrieve("", 3).is_empty());
    assert_eq!(
        retriever.get_context("zzz", 1200),
        "Physics concepts from Class 10 curriculum."
    );
    assert_eq!(
        retriever.get_context("", 1200),
        "Physics concepts from Class 10 curriculum."
    );
}

#[test]
fn test_context_fits_budget() {
    let retriever = retriever();

    let full = retriever.get_context("Ohm's law", 1200);
    assert_eq!(full.matches("📚").count(), 3);
    assert_eq!(full.chars().count(), 1026);
    assert!(full.starts_with(
        "📚 **Electricity** - Ohm's Law:\nOhm's Law states that current through a conductor"
    ));

    let two = retriever.get_context("Ohm's law", 700);
    assert_eq!(two.matches("📚").count(), 2);
    assert_eq!(two.chars().count(), 684);

    let one = retriever.get_context("Ohm's law", 400);
    assert_eq!(one.matches("📚").count(), 1);
    assert_eq!(one.chars().count(), 309);
}

#[test]
fn test_first_block_overflow_gives_empty_context() {
    let retriever = retriever();
    assert_eq!(retriever.get_context("Ohm's law", 300), "");
    assert_eq!(retriever.get_context("Ohm's law", 0), "");
}

#[test]
fn test_context_uses_configured_budget() {
    let config = ConfigBuilder::new()
        .with_max_context_length(700)
        .build()
        .unwrap();
    let retriever = KnowledgeRetriever::with_config(default_corpus(), config.retrieval).unwrap();

    assert_eq!(
        retriever.context("Ohm's law"),
        retriever.get_context("Ohm's law", 700)
    );
}

#[test]
fn test_context_queries() {
    let retriever = retriever();

    let plan = retriever.context_for(&ContextQuery::study_plan(Some("Electricity")));
    assert!(plan.starts_with("📚 **Electricity** - Electric Power:"));

    let chat = retriever.context_for(&ContextQuery::chat("Ohm's law"));
    assert_eq!(chat, retriever.context("Ohm's law"));
}

#[test]
fn test_chapter_topics() {
    let retriever = retriever();

    assert_eq!(
        retriever.chapter_topics(Some("Electricity")),
        vec![
            "Electric Current",
            "Electric Potential",
            "Ohm's Law",
            "Resistance",
            "Resistor Combinations",
            "Electric Power"
        ]
    );
    assert_eq!(
        retriever.chapter_topics(Some("magnetic")),
        vec![
            "Magnetic Field",
            "Magnetic Field due to Current",
            "Force on Current-carrying Conductor",
            "Electromagnetic Induction"
        ]
    );
    assert!(retriever.chapter_topics(Some("thermodynamics")).is_empty());
}

#[test]
fn test_all_topics() {
    let retriever = retriever();

    let all = retriever.all_topics();
    assert_eq!(all.len(), 17);

    let listed: HashSet<String> = retriever.chapter_topics(None).into_iter().collect();
    assert_eq!(listed.len(), 17);
    assert!(all.iter().all(|topic| listed.contains(topic)));

    assert_eq!(
        retriever.chapters(),
        vec![
            "Light - Reflection and Refraction",
            "Electricity",
            "Magnetic Effects of Electric Current"
        ]
    );
}

#[test]
fn test_concurrent_queries_agree() {
    let retriever = retriever();
    let expected = retriever.get_context("magnetic field", 1200);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let retriever = retriever.clone();
                scope.spawn(move || retriever.get_context("magnetic field", 1200))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
