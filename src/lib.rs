#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Naive Bayes sentiment scoring.
//!
//! A model is trained from labeled positive and negative documents, frozen
//! by a single estimation pass, and then scored against any number of times
//! without further mutation.
//!
//! ## Modules
//!
//! - [`normalize`] - Text cleaning and tokenization shared by training and scoring
//! - [`Trainer`] - Vocabulary and counting engine
//! - [`Scorer`] - Word posterior, sentence log-likelihood and document analysis
//! - [`store`] - JSON/RON persistence with shape validation
//! - [`ModelRegistry`] - One model per language tag with English fallback
//!
//! ## Example
//!
//! ```
//! use layered_sentiment::{clean, Label, Scorer, Trainer};
//!
//! let mut trainer = Trainer::new();
//! trainer.ingest(&clean("What a great, fun movie!"), Label::Positive);
//! trainer.ingest(&clean("A dull and boring movie."), Label::Negative);
//! let model = trainer.finish().unwrap();
//!
//! let scorer = Scorer::new(&model).unwrap();
//! assert!(scorer.sentiment_of_word("great") > 0.5);
//! assert_eq!(scorer.sentiment_of_word("movie"), 0.5);
//!
//! let analysis = scorer.analyze("Great fun. Not boring!");
//! assert_eq!(analysis.words.len(), 4);
//! assert_eq!(analysis.sentences.len(), 2);
//! ```

mod analysis;
mod config;
mod display;
mod errors;
mod estimate;
mod language;
mod model;
pub mod normalize;
mod scorer;
pub mod store;
mod trainer;

pub use analysis::{split_sentences, Analysis, SentenceScore, WordScore};
pub use config::ScorerConfig;
pub use display::AnalysisDisplay;
pub use errors::{SentimentError, SentimentResult};
pub use language::{Language, ModelRegistry};
pub use model::{Label, Model, WordStat, MIN_TOKEN_LEN};
pub use normalize::{clean, AsciiNormalizer, Normalizer};
pub use scorer::{LogLikelihood, Scorer, NEUTRAL};
pub use store::ModelFormat;
pub use trainer::Trainer;

/// Analyze `text` against `model` with the default scorer configuration.
pub fn analyze(model: &Model, text: &str) -> SentimentResult<Analysis> {
    Ok(Scorer::new(model)?.analyze(text))
}

/// Restore a model from JSON bytes.
pub fn restore(bytes: &[u8]) -> SentimentResult<Model> {
    store::from_bytes(bytes, ModelFormat::Json)
}

#[cfg(test)]
mod tests;
