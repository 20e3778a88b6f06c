//! Error types for corpus loading and configuration.

use layered_sentiment::SentimentError;
use thiserror::Error;

/// Errors from the training harness.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failure inside the model: missing corpus, i/o, persistence.
    #[error(transparent)]
    Sentiment(#[from] SentimentError),

    /// The configuration file could not be read or parsed.
    #[error("failed to load config: {path}: {message}")]
    Config { path: String, message: String },
}

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;
