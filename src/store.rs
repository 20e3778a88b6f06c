//! Model persistence.
//!
//! Models are written as JSON or RON, both human-inspectable. Loading
//! validates the shape of the data before handing a [`Model`] back; it does
//! not require that the model was estimated.

use crate::{Model, ModelRegistry, SentimentError, SentimentResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// On-disk encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    #[default]
    Json,
    Ron,
}

impl ModelFormat {
    /// `.ron` files are RON, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => ModelFormat::Ron,
            _ => ModelFormat::Json,
        }
    }
}

fn encode<T: Serialize>(value: &T, format: ModelFormat) -> SentimentResult<Vec<u8>> {
    match format {
        ModelFormat::Json => serde_json::to_vec_pretty(value).map_err(|e| {
            SentimentError::invalid_argument(format!("failed to serialize model: {}", e))
        }),
        ModelFormat::Ron => {
            let config = ron::ser::PrettyConfig::new()
                .depth_limit(4)
                .enumerate_arrays(false);
            ron::ser::to_string_pretty(value, config)
                .map(String::into_bytes)
                .map_err(|e| {
                    SentimentError::invalid_argument(format!("failed to serialize model: {}", e))
                })
        }
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8], format: ModelFormat) -> SentimentResult<T> {
    match format {
        ModelFormat::Json => serde_json::from_slice(bytes).map_err(SentimentError::deserialization),
        ModelFormat::Ron => {
            let text = std::str::from_utf8(bytes).map_err(SentimentError::deserialization)?;
            ron::from_str(text).map_err(SentimentError::deserialization)
        }
    }
}

/// Check that restored fields are consistent with each other.
fn validate(model: &Model) -> SentimentResult<()> {
    if model.words.len() as u64 != model.vocabulary_size && model.vocabulary_size != 0 {
        return Err(SentimentError::deserialization(format!(
            "vocabulary size {} does not match {} stored words",
            model.vocabulary_size,
            model.words.len()
        )));
    }
    if model.count_positive_docs.checked_add(model.count_negative_docs)
        != Some(model.count_total_docs)
    {
        return Err(SentimentError::deserialization(format!(
            "document tallies disagree: {} positive + {} negative != {} total",
            model.count_positive_docs, model.count_negative_docs, model.count_total_docs
        )));
    }

    let mut positive_tokens = 0u64;
    let mut negative_tokens = 0u64;
    for (word, stat) in &model.words {
        match (
            positive_tokens.checked_add(stat.count_positive),
            negative_tokens.checked_add(stat.count_negative),
        ) {
            (Some(positive), Some(negative)) => {
                positive_tokens = positive;
                negative_tokens = negative;
            }
            _ => {
                return Err(SentimentError::deserialization(format!(
                    "word counts for {:?} overflow the token tallies",
                    word
                )))
            }
        }
    }
    if positive_tokens != model.count_positive_tokens
        || negative_tokens != model.count_negative_tokens
    {
        return Err(SentimentError::deserialization(format!(
            "token tallies {}/{} do not match word counts {}/{}",
            model.count_positive_tokens, model.count_negative_tokens, positive_tokens, negative_tokens
        )));
    }

    let valid_probability = |p: f64| p.is_finite() && (0.0..1.0).contains(&p);
    let valid_prior = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);
    if !valid_prior(model.prior_positive) || !valid_prior(model.prior_negative) {
        return Err(SentimentError::deserialization("class priors must lie in [0, 1]"));
    }
    for (word, stat) in &model.words {
        if !valid_probability(stat.probability_positive)
            || !valid_probability(stat.probability_negative)
        {
            return Err(SentimentError::deserialization(format!(
                "probabilities for {:?} must lie in [0, 1)",
                word
            )));
        }
    }
    Ok(())
}

fn require_path(path: &Path, action: &str) -> SentimentResult<()> {
    if path.as_os_str().is_empty() {
        return Err(SentimentError::invalid_argument(format!(
            "cannot {} a model without a path",
            action
        )));
    }
    Ok(())
}

/// Serialize a model without touching the filesystem.
pub fn to_bytes(model: &Model, format: ModelFormat) -> SentimentResult<Vec<u8>> {
    encode(model, format)
}

/// Restore a model from bytes produced by [`to_bytes`].
pub fn from_bytes(bytes: &[u8], format: ModelFormat) -> SentimentResult<Model> {
    let model: Model = decode(bytes, format)?;
    validate(&model)?;
    Ok(model)
}

/// Write `model` to `path`, choosing the format from its extension.
pub fn save(model: &Model, path: impl AsRef<Path>) -> SentimentResult<()> {
    let path = path.as_ref();
    save_as(model, path, ModelFormat::from_path(path))
}

/// Write `model` to `path` in `format`, whatever the extension says.
pub fn save_as(model: &Model, path: impl AsRef<Path>, format: ModelFormat) -> SentimentResult<()> {
    let path = path.as_ref();
    require_path(path, "save")?;

    let bytes = to_bytes(model, format)?;
    fs::write(path, &bytes).map_err(|e| SentimentError::io(path, e))?;

    info!(
        path = %path.display(),
        ?format,
        bytes = bytes.len(),
        vocabulary = model.vocabulary_size,
        "saved sentiment model"
    );
    Ok(())
}

/// Read a model previously written with [`save`].
pub fn load(path: impl AsRef<Path>) -> SentimentResult<Model> {
    let path = path.as_ref();
    require_path(path, "load")?;

    let bytes = fs::read(path).map_err(|e| SentimentError::io(path, e))?;
    let model = from_bytes(&bytes, ModelFormat::from_path(path))?;

    debug!(path = %path.display(), vocabulary = model.vocabulary_size, "loaded sentiment model");
    Ok(model)
}

/// Write every model of a registry to one file.
pub fn save_registry(registry: &ModelRegistry, path: impl AsRef<Path>) -> SentimentResult<()> {
    let path = path.as_ref();
    require_path(path, "save")?;

    let bytes = encode(registry, ModelFormat::from_path(path))?;
    fs::write(path, &bytes).map_err(|e| SentimentError::io(path, e))?;

    info!(path = %path.display(), models = registry.len(), "saved model registry");
    Ok(())
}

pub fn load_registry(path: impl AsRef<Path>) -> SentimentResult<ModelRegistry> {
    let path = path.as_ref();
    require_path(path, "load")?;

    let bytes = fs::read(path).map_err(|e| SentimentError::io(path, e))?;
    let registry: ModelRegistry = decode(&bytes, ModelFormat::from_path(path))?;
    for (_, model) in registry.models() {
        validate(model)?;
    }
    Ok(registry)
}
