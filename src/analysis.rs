//! Per-call analysis results.

use crate::display::AnalysisDisplay;
use crate::Language;
use serde::{Deserialize, Serialize};

/// Sentiment of a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

/// Sentiment of one sentence segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// The trimmed segment as it appeared in the input.
    pub sentence: String,
    pub score: f64,
}

/// Result of [`Scorer::analyze`](crate::Scorer::analyze).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Language whose model produced the scores, when dispatched through a
    /// [`ModelRegistry`](crate::ModelRegistry).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// One entry per token of the normalized text, in input order.
    pub words: Vec<WordScore>,
    /// Only populated when the input has more than one sentence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sentences: Vec<SentenceScore>,
    pub score: f64,
}

impl Analysis {
    pub fn is_positive(&self) -> bool {
        self.score > 0.5
    }

    pub fn display(&self) -> AnalysisDisplay<'_> {
        AnalysisDisplay::new(self)
    }
}

/// Split raw text into sentences on `.`, `?` and `!`.
///
/// Delimiters are dropped and segments are trimmed; empty segments (from
/// consecutive delimiters or trailing whitespace) are filtered out.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(|c: char| matches!(c, '.' | '?' | '!'))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
