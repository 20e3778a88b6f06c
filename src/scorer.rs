//! Word, sentence and document scoring over a frozen model.
//!
//! Words score with the Bayesian posterior `P(positive | word)`. Sentences and
//! whole documents are classified by comparing log-likelihoods, which stays
//! stable on long inputs where multiplying probabilities would underflow.

use crate::analysis::{split_sentences, Analysis, SentenceScore, WordScore};
use crate::normalize::{tokens, AsciiNormalizer, Normalizer};
use crate::{Label, Model, ScorerConfig, SentimentError, SentimentResult, WordStat, MIN_TOKEN_LEN};

/// Score returned for words that carry no usable evidence.
pub const NEUTRAL: f64 = 0.5;

/// Summed log-likelihoods of a token sequence under each class, priors
/// included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLikelihood {
    pub positive: f64,
    pub negative: f64,
}

impl LogLikelihood {
    pub fn is_positive(&self) -> bool {
        self.positive > self.negative
    }

    /// Positive minus negative. Infinite when one class has a zero prior.
    pub fn log_odds(&self) -> f64 {
        self.positive - self.negative
    }
}

/// Read-only scoring view over an estimated [`Model`].
///
/// Holds no mutable state, so any number of scorers may share one model
/// across threads.
#[derive(Debug, Clone)]
pub struct Scorer<'m, N = AsciiNormalizer> {
    model: &'m Model,
    config: ScorerConfig,
    normalizer: N,
}

impl<'m> Scorer<'m> {
    pub fn new(model: &'m Model) -> SentimentResult<Self> {
        Self::with_config(model, ScorerConfig::default())
    }

    /// Fails with `InvalidState` unless the model was trained and estimated.
    pub fn with_config(model: &'m Model, config: ScorerConfig) -> SentimentResult<Self> {
        if model.count_total_docs() == 0 {
            return Err(SentimentError::invalid_state(
                "model has no training documents",
            ));
        }
        if !model.is_estimated() {
            return Err(SentimentError::invalid_state(
                "model probabilities have not been estimated",
            ));
        }
        Ok(Self {
            model,
            config,
            normalizer: AsciiNormalizer,
        })
    }
}

impl<'m, N: Normalizer> Scorer<'m, N> {
    /// Swap the normalizer used by [`analyze`](Self::analyze).
    pub fn with_normalizer<M: Normalizer>(self, normalizer: M) -> Scorer<'m, M> {
        Scorer {
            model: self.model,
            config: self.config,
            normalizer,
        }
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    fn vocabulary_entry(&self, word: &str) -> Option<&'m WordStat> {
        if word.len() < MIN_TOKEN_LEN {
            return None;
        }
        self.model.word(word)
    }

    /// `P(positive | word)`, or [`NEUTRAL`] for short, unseen or
    /// low-evidence words. Always within `[0, 1]`.
    pub fn sentiment_of_word(&self, word: &str) -> f64 {
        let stat = match self.vocabulary_entry(word) {
            Some(stat) if stat.total() >= self.config.min_occurrences => stat,
            _ => return NEUTRAL,
        };

        let positive = stat.probability_positive * self.model.prior(Label::Positive);
        let negative = stat.probability_negative * self.model.prior(Label::Negative);
        let evidence = positive + negative;
        if evidence <= 0.0 || !evidence.is_finite() {
            return NEUTRAL;
        }

        (positive / evidence).clamp(0.0, 1.0)
    }

    /// Accumulate log-likelihoods left to right over eligible tokens.
    ///
    /// Tokens shorter than three characters or absent from the vocabulary
    /// are skipped. Priors are added once at the end.
    pub fn log_likelihood(&self, sentence: &str) -> LogLikelihood {
        let mut positive = 0.0;
        let mut negative = 0.0;
        for token in tokens(sentence) {
            if let Some(stat) = self.vocabulary_entry(token) {
                positive += stat.probability_positive.ln();
                negative += stat.probability_negative.ln();
            }
        }
        positive += self.model.prior(Label::Positive).ln();
        negative += self.model.prior(Label::Negative).ln();

        LogLikelihood { positive, negative }
    }

    /// Continuous document score: log P(positive, text) - log P(negative, text).
    pub fn log_odds(&self, sentence: &str) -> f64 {
        self.log_likelihood(sentence).log_odds()
    }

    /// `1.0` when the positive log-likelihood strictly wins, else `0.0`.
    pub fn sentiment_of_sentence(&self, sentence: &str) -> f64 {
        if self.log_likelihood(sentence).is_positive() {
            1.0
        } else {
            0.0
        }
    }

    /// Clean `text`, then score every token, every sentence (when there is
    /// more than one) and the text as a whole.
    pub fn analyze(&self, text: &str) -> Analysis {
        let segments = split_sentences(text);
        let sentences = if segments.len() > 1 {
            segments
                .into_iter()
                .map(|segment| SentenceScore {
                    sentence: segment.to_string(),
                    score: self.sentiment_of_sentence(&self.normalizer.clean(segment)),
                })
                .collect()
        } else {
            Vec::new()
        };

        let normalized = self.normalizer.clean(text);
        let words = tokens(&normalized)
            .map(|word| WordScore {
                word: word.to_string(),
                score: self.sentiment_of_word(word),
            })
            .collect();

        Analysis {
            language: None,
            words,
            sentences,
            score: self.sentiment_of_sentence(&normalized),
        }
    }

    /// The `n` words leaning hardest toward `label`.
    ///
    /// Ties are broken by the word itself, ascending, so the ranking never
    /// depends on map iteration order.
    pub fn most_polar(&self, label: Label, n: usize) -> Vec<(&'m str, f64)> {
        let model: &'m Model = self.model;
        let mut ranked: Vec<(&'m str, f64)> = model
            .words()
            .filter(|(word, stat)| {
                word.len() >= MIN_TOKEN_LEN && stat.total() >= self.config.min_occurrences
            })
            .map(|(word, _)| {
                let posterior = self.sentiment_of_word(word);
                let toward = match label {
                    Label::Positive => posterior,
                    Label::Negative => 1.0 - posterior,
                };
                (word, toward)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Trainer;

    fn small_model() -> Model {
        let mut trainer = Trainer::new();
        trainer.ingest("good film", Label::Positive);
        trainer.ingest("bad film", Label::Negative);
        trainer.finish().unwrap()
    }

    #[test]
    fn test_scorer_rejects_untrained_model() {
        let model = Model::default();
        let err = Scorer::new(&model).unwrap_err();
        assert!(matches!(err, SentimentError::InvalidState { .. }));
    }

    #[test]
    fn test_scorer_rejects_unestimated_model() {
        let mut trainer = Trainer::new();
        trainer.ingest("good film", Label::Positive);
        let counts = trainer.counts().clone();

        let err = Scorer::new(&counts).unwrap_err();
        assert!(matches!(err, SentimentError::InvalidState { .. }));
    }

    #[test]
    fn test_neutral_for_short_and_unseen_words() {
        let model = small_model();
        let scorer = Scorer::new(&model).unwrap();

        assert_eq!(scorer.sentiment_of_word("ok"), NEUTRAL);
        assert_eq!(scorer.sentiment_of_word(""), NEUTRAL);
        assert_eq!(scorer.sentiment_of_word("marvellous"), NEUTRAL);
    }

    #[test]
    fn test_neutral_below_min_occurrences() {
        let model = small_model();
        let scorer = Scorer::with_config(&model, ScorerConfig::with_min_occurrences(6)).unwrap();
        assert_eq!(scorer.sentiment_of_word("good"), NEUTRAL);

        let scorer = Scorer::new(&model).unwrap();
        assert!(scorer.sentiment_of_word("good") > NEUTRAL);
    }

    #[test]
    fn test_word_posterior() {
        let model = small_model();
        let scorer = Scorer::new(&model).unwrap();

        assert!((scorer.sentiment_of_word("good") - 2.0 / 3.0).abs() < 1e-12);
        assert!((scorer.sentiment_of_word("bad") - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(scorer.sentiment_of_word("film"), 0.5);
    }

    #[test]
    fn test_sentence_decision() {
        let model = small_model();
        let scorer = Scorer::new(&model).unwrap();

        assert_eq!(scorer.sentiment_of_sentence("a good film"), 1.0);
        assert_eq!(scorer.sentiment_of_sentence("a bad film"), 0.0);
        // equal priors and no evidence is not a positive win
        assert_eq!(scorer.sentiment_of_sentence("nothing known here"), 0.0);
        assert!(scorer.log_odds("good good") > scorer.log_odds("good"));
    }

    #[test]
    fn test_zero_prior_never_panics() {
        let mut trainer = Trainer::new();
        trainer.ingest("great day", Label::Positive);
        let model = trainer.finish().unwrap();
        let scorer = Scorer::new(&model).unwrap();

        assert_eq!(scorer.sentiment_of_word("great"), 1.0);
        assert_eq!(scorer.sentiment_of_sentence("great day"), 1.0);
        assert_eq!(scorer.log_odds("great day"), f64::INFINITY);
    }

    #[test]
    fn test_most_polar_ties_break_alphabetically() {
        let mut trainer = Trainer::new();
        trainer.ingest("superb lovely film", Label::Positive);
        trainer.ingest("awful film", Label::Negative);
        let model = trainer.finish().unwrap();
        let scorer = Scorer::new(&model).unwrap();

        let top: Vec<&str> = scorer
            .most_polar(Label::Positive, 2)
            .into_iter()
            .map(|(word, _)| word)
            .collect();
        assert_eq!(top, vec!["lovely", "superb"]);

        let worst = scorer.most_polar(Label::Negative, 1);
        assert_eq!(worst[0].0, "awful");
    }
}
