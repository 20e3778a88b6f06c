//! Vocabulary and counting engine.
//!
//! A [`Trainer`] owns the model while it is being built. Every mutation goes
//! through `&mut self`, and the estimated [`Model`] it hands back exposes no
//! mutating methods.

use crate::estimate::estimate;
use crate::normalize::tokens;
use crate::{Label, Model, SentimentResult, MIN_TOKEN_LEN};
use tracing::{debug, info};

/// Accumulates word and document counts from labeled, normalized documents.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    model: Model,
}

impl Trainer {
    /// Start from an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue training from an existing model's counts.
    ///
    /// Probabilities carried by `model` are discarded on the next
    /// [`estimate`](Self::estimate), which recomputes them from counts.
    pub fn resume(model: Model) -> Self {
        Self { model }
    }

    /// Count one normalized document under `label`.
    ///
    /// Tokens shorter than three characters are ignored. The document tally
    /// is incremented even if no token survives.
    pub fn ingest(&mut self, document: &str, label: Label) {
        for token in tokens(document) {
            if token.len() < MIN_TOKEN_LEN {
                continue;
            }
            self.model.record_token(token, label);
        }
        self.model.record_document(label);
    }

    pub fn ingest_all<'a, I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = (&'a str, Label)>,
    {
        for (document, label) in documents {
            self.ingest(document, label);
        }
    }

    /// Counts gathered so far.
    pub fn counts(&self) -> &Model {
        &self.model
    }

    /// Run the estimation pass over the current counts.
    ///
    /// Safe to call again after more ingestion.
    pub fn estimate(&mut self) -> SentimentResult<&Model> {
        estimate(&mut self.model)?;
        Ok(&self.model)
    }

    /// Estimate and hand out the frozen model.
    pub fn finish(mut self) -> SentimentResult<Model> {
        estimate(&mut self.model)?;
        info!(
            documents = self.model.count_total_docs,
            positive = self.model.count_positive_docs,
            negative = self.model.count_negative_docs,
            vocabulary = self.model.vocabulary_size,
            "trained sentiment model"
        );
        Ok(self.model)
    }
}

impl Extend<(String, Label)> for Trainer {
    fn extend<T: IntoIterator<Item = (String, Label)>>(&mut self, iter: T) {
        let mut count = 0usize;
        for (document, label) in iter {
            self.ingest(&document, label);
            count += 1;
        }
        debug!(count, "ingested documents");
    }
}
