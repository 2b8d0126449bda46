//! Query builders for the host application's content generators.
//!
//! Each generator asks for context with a query phrased for its task; these
//! types keep that phrasing in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A request for prompt context, phrased by purpose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContextQuery {
    /// Quiz generation on an optional topic
    Quiz {
        topic: Option<String>,
        class_level: u8,
    },

    /// Study plan generation for an optional chapter
    StudyPlan { chapter: Option<String> },

    /// Explanation of a student's question within a chapter
    Explanation { question: String, chapter: String },

    /// Free-form tutoring chat
    Chat { message: String },
}

impl ContextQuery {
    /// Quiz context for a topic, or for the class level when no topic is given
    pub fn quiz(topic: Option<&str>, class_level: u8) -> Self {
        Self::Quiz {
            topic: non_empty(topic),
            class_level,
        }
    }

    /// Study plan context for a chapter, or the whole syllabus
    pub fn study_plan(chapter: Option<&str>) -> Self {
        Self::StudyPlan {
            chapter: non_empty(chapter),
        }
    }

    /// Explanation context
    pub fn explanation(question: impl Into<String>, chapter: impl Into<String>) -> Self {
        Self::Explanation {
            question: question.into(),
            chapter: chapter.into(),
        }
    }

    /// Chat context
    pub fn chat(message: impl Into<String>) -> Self {
        Self::Chat {
            message: message.into(),
        }
    }

    /// The retrieval query string for this request
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Quiz {
                topic: Some(topic), ..
            } => topic.clone(),
            Self::Quiz {
                topic: None,
                class_level,
            } => format!("Class {class_level} Physics concepts"),
            Self::StudyPlan {
                chapter: Some(chapter),
            } => format!("Class 10 Physics {chapter} chapter concepts formulas"),
            Self::StudyPlan { chapter: None } => "Class 10 Physics chapters syllabus".to_string(),
            Self::Explanation { question, chapter } => {
                format!("{question} {chapter} physics concept")
            }
            Self::Chat { message } => message.clone(),
        }
    }
}

impl fmt::Display for ContextQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
