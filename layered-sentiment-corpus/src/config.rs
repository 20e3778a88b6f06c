//! Training configuration loaded from TOML.
//!
//! ```toml
//! [corpus]
//! positive = "datasets/train/pos"
//! negative = "datasets/train/neg"
//! language = "en"
//!
//! [model]
//! path = "model.json"
//!
//! [scorer]
//! min_occurrences = 1
//! ```

use crate::{CorpusError, CorpusResult};
use layered_sentiment::{Language, Model, ModelFormat, Scorer, ScorerConfig, SentimentResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Full training configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentConfig {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
}

/// Where the labeled documents live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory of positive examples.
    pub positive: PathBuf,
    /// Directory of negative examples.
    pub negative: PathBuf,
    /// Language the corpus is written in.
    #[serde(default)]
    pub language: Language,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            positive: PathBuf::from("datasets/train/pos"),
            negative: PathBuf::from("datasets/train/neg"),
            language: Language::English,
        }
    }
}

/// Where, if anywhere, the trained model is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Overrides the format implied by the path's extension.
    #[serde(default)]
    pub format: Option<ModelFormat>,
}

impl SentimentConfig {
    /// Parse a TOML string. Relative paths are kept as written.
    pub fn from_toml_str(content: &str) -> CorpusResult<Self> {
        toml::from_str(content).map_err(|e| CorpusError::Config {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file, resolving relative paths against the file's
    /// directory.
    pub fn load(path: &Path) -> CorpusResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CorpusError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| CorpusError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if let Some(base) = path.parent() {
            config.resolve_relative(base);
        }
        Ok(config)
    }

    /// Make relative corpus and model paths relative to `base`.
    pub fn resolve_relative(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.corpus.positive);
        resolve(&mut self.corpus.negative);
        if let Some(model_path) = self.model.path.as_mut() {
            resolve(model_path);
        }
    }

    /// A scorer over `model` using the `[scorer]` settings.
    pub fn scorer<'m>(&self, model: &'m Model) -> SentimentResult<Scorer<'m>> {
        Scorer::with_config(model, self.scorer)
    }

    /// Format used when persisting: the explicit override, else the path's
    /// extension.
    pub fn model_format(&self) -> Option<ModelFormat> {
        match (&self.model.format, &self.model.path) {
            (Some(format), _) => Some(*format),
            (None, Some(path)) => Some(ModelFormat::from_path(path)),
            (None, None) => None,
        }
    }
}
