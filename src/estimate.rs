//! Probability estimation: class priors and Laplace-smoothed word likelihoods.

use crate::{Label, Model, SentimentError, SentimentResult};
use tracing::debug;

/// Derive priors and per-word probabilities from the model's counts.
///
/// Recomputes everything from counts, so running it again on unchanged
/// counts yields bit-identical values. Fails when the model holds no
/// documents.
pub(crate) fn estimate(model: &mut Model) -> SentimentResult<()> {
    if model.count_total_docs == 0 {
        return Err(SentimentError::invalid_state(
            "cannot estimate probabilities without training documents",
        ));
    }

    model.vocabulary_size = model.words.len() as u64;

    let total = model.count_total_docs as f64;
    model.prior_positive = model.count_positive_docs as f64 / total;
    model.prior_negative = model.count_negative_docs as f64 / total;

    let positive_denominator = smoothing_denominator(model, Label::Positive);
    let negative_denominator = smoothing_denominator(model, Label::Negative);

    for stat in model.words.values_mut() {
        stat.probability_positive = (stat.count_positive as f64 + 1.0) / positive_denominator;
        stat.probability_negative = (stat.count_negative as f64 + 1.0) / negative_denominator;
    }

    debug!(
        vocabulary_size = model.vocabulary_size,
        prior_positive = model.prior_positive,
        prior_negative = model.prior_negative,
        "estimated word probabilities"
    );

    Ok(())
}

/// Class token total plus the vocabulary, plus one slot for unseen words.
///
/// The extra slot keeps every probability strictly below 1, even for a
/// single-word vocabulary.
fn smoothing_denominator(model: &Model, label: Label) -> f64 {
    model.count_tokens(label) as f64 + model.vocabulary_size as f64 + 1.0
}
