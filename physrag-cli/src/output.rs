use crate::commands::OutputFormat;
use crate::handlers::corpus::Diagnosis;
use crate::handlers::retrieval::SearchHit;
use colored::*;
use physrag::PhysragError;
use physrag::prelude::CorpusSource;
use serde::Serialize;
use serde_json::json;

/// Terminal palette
pub struct CliColors;

impl CliColors {
    pub const SUCCESS: Color = Color::TrueColor { r: 34, g: 197, b: 94 };
    pub const ERROR: Color = Color::TrueColor { r: 239, g: 68, b: 68 };
    pub const WARNING: Color = Color::TrueColor { r: 245, g: 158, b: 11 };
    pub const ACCENT: Color = Color::TrueColor { r: 59, g: 130, b: 246 };
    pub const CHAPTER: Color = Color::TrueColor { r: 168, g: 85, b: 247 };
    pub const MUTED: Color = Color::TrueColor { r: 148, g: 163, b: 184 };
    pub const PRIMARY: Color = Color::White;
}

/// Output a PhysragError in the requested format
pub fn output_error(error: &PhysragError, output_format: OutputFormat) {
    match output_format {
        OutputFormat::Json => {
            let (code, message) = match error {
                PhysragError::Configuration(msg) => ("CONFIGURATION_ERROR", msg.clone()),
                PhysragError::Corpus(e) => ("CORPUS_ERROR", e.to_string()),
                PhysragError::Logging(e) => ("LOGGING_ERROR", e.to_string()),
                PhysragError::Other(msg) => ("OTHER_ERROR", msg.clone()),
            };

            let error_response = json!({
                "error": true,
                "code": code,
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });

            eprintln!(
                "{}",
                serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Text => eprintln!("{}", format_error(&error.to_string())),
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn status_line(symbol: &str, msg: &str, color: Color) -> String {
    format!("{} {}", symbol.color(color).bold(), msg.color(color))
}

pub fn format_success(msg: &str) -> String {
    status_line("✓", msg, CliColors::SUCCESS)
}

pub fn format_error(msg: &str) -> String {
    status_line("✗", msg, CliColors::ERROR)
}

pub fn format_warning(msg: &str) -> String {
    status_line("⚠", msg, CliColors::WARNING)
}

pub fn format_info(msg: &str) -> String {
    status_line("ℹ", msg, CliColors::ACCENT)
}

/// Shorten text to at most `max` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

pub fn print_search_hits(query: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!(
            "{}",
            format_info(&format!("No relevant chunks for '{query}'."))
        );
        return;
    }

    println!(
        "{}",
        format_info(&format!("Found {} relevant chunks:", hits.len()))
    );
    println!();

    for hit in hits {
        println!(
            "{} {} {} {}",
            format!("{}.", hit.rank).color(CliColors::MUTED),
            format!("{:.4}", hit.score).color(CliColors::ACCENT).bold(),
            hit.subtopic.color(CliColors::PRIMARY).bold(),
            format!("[{}]", hit.chapter).color(CliColors::CHAPTER)
        );
        println!("   {}", truncate_chars(&hit.text, 100).color(CliColors::MUTED));

        if let Some(breakdown) = &hit.breakdown {
            println!(
                "   {} content {:.4}  subtopic {:.4}  chapter {:.4}  keywords {:.4}",
                "↳".color(CliColors::MUTED),
                breakdown.content,
                breakdown.subtopic,
                breakdown.category,
                breakdown.keyword
            );
        }
    }
}

pub fn print_name_list(heading: &str, names: &[String]) {
    if names.is_empty() {
        println!("{}", format_info("Nothing found."));
        return;
    }

    println!(
        "{}",
        format!("━━━ {} ({}) ━━━", heading, names.len())
            .color(CliColors::ACCENT)
            .bold()
    );
    for name in names {
        println!("  • {}", name.color(CliColors::PRIMARY));
    }
}

pub fn print_diagnosis(diagnosis: &Diagnosis) {
    println!("{}", "━━━ Physrag Diagnostics ━━━".color(CliColors::ACCENT).bold());
    println!(
        "{}: {}",
        "Version".color(CliColors::MUTED),
        diagnosis.version
    );
    println!(
        "{}: {}",
        "Corpus path".color(CliColors::MUTED),
        diagnosis.corpus_path.display()
    );

    match &diagnosis.source {
        CorpusSource::Loaded { .. } => {
            println!("{}", format_success("Corpus: Loaded from store"));
        }
        CorpusSource::Default {
            reason, persisted, ..
        } => {
            println!("{}", format_warning(&format!("Corpus: Built-in default ({reason})")));
            if *persisted {
                println!("{}", format_info("Default corpus was written back to the store"));
            } else {
                println!("{}", format_warning("Default corpus was not written back"));
            }
        }
        CorpusSource::InMemory => {
            println!("{}", format_info("Corpus: In memory"));
        }
    }

    println!(
        "{}: {} ({} topics)",
        "Chunks".color(CliColors::MUTED),
        diagnosis.chunks,
        diagnosis.topics
    );
    for chapter in &diagnosis.chapters {
        println!(
            "  • {} {}",
            chapter.name.color(CliColors::CHAPTER),
            format!("({} chunks)", chapter.chunks).color(CliColors::MUTED)
        );
    }
}
