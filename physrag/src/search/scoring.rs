//! Relevance scoring configuration
//!
//! The total score of a chunk blends three similarity components with a
//! capped keyword-overlap bonus. The default weights are the values the
//! ranking was tuned with; changing them changes which chunks reach prompts.

use serde::{Deserialize, Serialize};

/// Configuration for chunk relevance scoring
///
/// # Example
///
/// ```no_run
/// use physrag::search::ScoringConfig;
///
/// let config = ScoringConfig {
///     subtopic_weight: 2.0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier for query/body similarity. Default: 1.0
    pub content_weight: f64,

    /// Multiplier for query/subtopic similarity. Default: 1.5
    pub subtopic_weight: f64,

    /// Multiplier for query/chapter similarity. Default: 1.2
    pub category_weight: f64,

    /// Bonus added for every query token found in any field. Default: 0.3
    ///
    /// Repeated tokens in the query each earn the bonus again.
    pub keyword_bonus: f64,

    /// Upper bound on the accumulated keyword bonus. Default: 1.0
    pub keyword_cap: f64,

    /// Chunks scoring at or below this value are never returned. Default: 0.1
    pub relevance_floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            content_weight: 1.0,
            subtopic_weight: 1.5,
            category_weight: 1.2,
            keyword_bonus: 0.3,
            keyword_cap: 1.0,
            relevance_floor: 0.1,
        }
    }
}

impl ScoringConfig {
    /// Create a new scoring configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a total score clears the relevance floor
    pub fn is_relevant(&self, score: f64) -> bool {
        score > self.relevance_floor
    }

    /// Validate the configuration
    ///
    /// Every weight, the bonus, the cap and the floor must be finite and >= 0.0.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("content_weight", self.content_weight),
            ("subtopic_weight", self.subtopic_weight),
            ("category_weight", self.category_weight),
            ("keyword_bonus", self.keyword_bonus),
            ("keyword_cap", self.keyword_cap),
            ("relevance_floor", self.relevance_floor),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(format!("{name} must be a finite number"));
            }
            if value < 0.0 {
                return Err(format!("{name} must be >= 0.0"));
            }
        }

        Ok(())
    }
}
