//! Scorer configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`Scorer`](crate::Scorer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Words seen fewer times than this score neutral.
    pub min_occurrences: u64,
}

impl ScorerConfig {
    /// Score every word the model has seen at least once.
    pub fn standard() -> Self {
        Self { min_occurrences: 1 }
    }

    /// Require more evidence before a word moves away from neutral.
    pub fn with_min_occurrences(min_occurrences: u64) -> Self {
        Self { min_occurrences }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::standard()
    }
}
