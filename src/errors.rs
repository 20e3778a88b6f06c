//! Error types for training, scoring and persistence.

use thiserror::Error;

/// Errors surfaced by the sentiment model.
///
/// Every variant is terminal for the call that produced it; nothing in this
/// crate retries.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// A required argument (usually a path) was missing or empty.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A training directory produced no usable documents.
    #[error("no training documents found in {path}")]
    CorpusNotFound { path: String },

    /// Filesystem read or write failure.
    #[error("i/o error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Persisted bytes do not describe a valid model.
    #[error("failed to deserialize model: {message}")]
    Deserialization { message: String },

    /// The model cannot support the requested operation yet.
    #[error("invalid model state: {message}")]
    InvalidState { message: String },
}

impl SentimentError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        SentimentError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        SentimentError::InvalidState {
            message: message.into(),
        }
    }

    pub(crate) fn deserialization(message: impl ToString) -> Self {
        SentimentError::Deserialization {
            message: message.to_string(),
        }
    }

    /// Wrap an i/o failure with the path it happened at.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        SentimentError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result type for sentiment operations.
pub type SentimentResult<T> = Result<T, SentimentError>;
