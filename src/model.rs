//! The trained artifact: per-word statistics, document tallies and priors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum token length kept in the vocabulary and considered by the scorer.
pub const MIN_TOKEN_LEN: usize = 3;

/// Polarity of a training document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
}

/// Occurrence counts and smoothed probabilities for one vocabulary word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    pub count_positive: u64,
    pub count_negative: u64,
    /// P(word | positive). Zero until the model is estimated.
    pub probability_positive: f64,
    /// P(word | negative). Zero until the model is estimated.
    pub probability_negative: f64,
}

impl WordStat {
    pub(crate) fn first_seen(label: Label) -> Self {
        let mut stat = WordStat::default();
        stat.record(label);
        stat
    }

    pub(crate) fn record(&mut self, label: Label) {
        match label {
            Label::Positive => self.count_positive += 1,
            Label::Negative => self.count_negative += 1,
        }
    }

    /// Total occurrences across both classes.
    pub fn total(&self) -> u64 {
        self.count_positive.saturating_add(self.count_negative)
    }

    pub fn count(&self, label: Label) -> u64 {
        match label {
            Label::Positive => self.count_positive,
            Label::Negative => self.count_negative,
        }
    }

    pub fn probability(&self, label: Label) -> f64 {
        match label {
            Label::Positive => self.probability_positive,
            Label::Negative => self.probability_negative,
        }
    }
}

/// A sentiment model.
///
/// Produced by [`Trainer`](crate::Trainer) or restored by the
/// [`store`](crate::store). Only read access is public, so a model handed out
/// after estimation cannot change under concurrent scorers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub(crate) words: BTreeMap<String, WordStat>,
    pub(crate) count_positive_docs: u64,
    pub(crate) count_negative_docs: u64,
    pub(crate) count_total_docs: u64,
    /// Retained token occurrences in positive documents.
    pub(crate) count_positive_tokens: u64,
    /// Retained token occurrences in negative documents.
    pub(crate) count_negative_tokens: u64,
    pub(crate) prior_positive: f64,
    pub(crate) prior_negative: f64,
    pub(crate) vocabulary_size: u64,
}

impl Model {
    pub fn word(&self, word: &str) -> Option<&WordStat> {
        self.words.get(word)
    }

    /// All vocabulary entries in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = (&str, &WordStat)> {
        self.words.iter().map(|(word, stat)| (word.as_str(), stat))
    }

    pub fn count_docs(&self, label: Label) -> u64 {
        match label {
            Label::Positive => self.count_positive_docs,
            Label::Negative => self.count_negative_docs,
        }
    }

    pub fn count_total_docs(&self) -> u64 {
        self.count_total_docs
    }

    pub fn count_tokens(&self, label: Label) -> u64 {
        match label {
            Label::Positive => self.count_positive_tokens,
            Label::Negative => self.count_negative_tokens,
        }
    }

    pub fn prior(&self, label: Label) -> f64 {
        match label {
            Label::Positive => self.prior_positive,
            Label::Negative => self.prior_negative,
        }
    }

    pub fn vocabulary_size(&self) -> u64 {
        self.vocabulary_size
    }

    /// Whether an estimation pass has run over the current counts.
    pub fn is_estimated(&self) -> bool {
        self.count_total_docs > 0
            && self.vocabulary_size == self.words.len() as u64
            && self.prior_positive + self.prior_negative > 0.0
    }

    /// Drop the estimation marker after the counts change.
    ///
    /// Stale probabilities stay in place but the model no longer reports
    /// itself as estimated until the next estimation pass.
    fn invalidate(&mut self) {
        self.vocabulary_size = 0;
        self.prior_positive = 0.0;
        self.prior_negative = 0.0;
    }

    pub(crate) fn record_document(&mut self, label: Label) {
        self.invalidate();
        match label {
            Label::Positive => self.count_positive_docs += 1,
            Label::Negative => self.count_negative_docs += 1,
        }
        self.count_total_docs += 1;
    }

    pub(crate) fn record_token(&mut self, token: &str, label: Label) {
        self.invalidate();
        match self.words.get_mut(token) {
            Some(stat) => stat.record(label),
            None => {
                self.words
                    .insert(token.to_string(), WordStat::first_seen(label));
            }
        }
        match label {
            Label::Positive => self.count_positive_tokens += 1,
            Label::Negative => self.count_negative_tokens += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_token_creates_then_increments() {
        let mut model = Model::default();
        model.record_token("good", Label::Positive);
        model.record_token("good", Label::Negative);
        model.record_token("good", Label::Positive);

        let stat = model.word("good").unwrap();
        assert_eq!(stat.count_positive, 2);
        assert_eq!(stat.count_negative, 1);
        assert_eq!(stat.total(), 3);
        assert_eq!(model.count_tokens(Label::Positive), 2);
        assert_eq!(model.count_tokens(Label::Negative), 1);
    }

    #[test]
    fn test_record_document_tallies() {
        let mut model = Model::default();
        model.record_document(Label::Positive);
        model.record_document(Label::Negative);
        model.record_document(Label::Negative);

        assert_eq!(model.count_docs(Label::Positive), 1);
        assert_eq!(model.count_docs(Label::Negative), 2);
        assert_eq!(model.count_total_docs(), 3);
        assert!(!model.is_estimated());
    }

    #[test]
    fn test_total_saturates() {
        let stat = WordStat {
            count_positive: u64::MAX,
            count_negative: 1,
            ..WordStat::default()
        };
        assert_eq!(stat.total(), u64::MAX);
    }
}
