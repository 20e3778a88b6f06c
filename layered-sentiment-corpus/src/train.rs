//! Training from labeled directories.

use crate::loader::load_documents;
use crate::{CorpusResult, SentimentConfig};
use layered_sentiment::{
    store, Label, Model, ModelRegistry, SentimentError, SentimentResult, Trainer,
};
use std::fs;
use std::path::Path;

/// Ingest every document under `dir` as `label`, returning how many were read.
pub fn ingest_dir(trainer: &mut Trainer, dir: &Path, label: Label) -> SentimentResult<usize> {
    let documents = load_documents(dir, label)?;
    for document in &documents {
        trainer.ingest(&document.text, document.label);
    }
    Ok(documents.len())
}

/// Train a model from a directory of positive and one of negative examples.
///
/// Both directories must yield at least one document.
pub fn train(positive: impl AsRef<Path>, negative: impl AsRef<Path>) -> SentimentResult<Model> {
    let mut trainer = Trainer::new();
    ingest_dir(&mut trainer, positive.as_ref(), Label::Positive)?;
    ingest_dir(&mut trainer, negative.as_ref(), Label::Negative)?;
    trainer.finish()
}

/// Train from `config` and persist the model when a path is configured.
///
/// Score the result with [`SentimentConfig::scorer`] to apply the
/// configured `[scorer]` settings.
pub fn train_with_config(config: &SentimentConfig) -> CorpusResult<Model> {
    let model = train(&config.corpus.positive, &config.corpus.negative)?;

    if let (Some(path), Some(format)) = (&config.model.path, config.model_format()) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SentimentError::io(parent, e))?;
        }
        store::save_as(&model, path, format)?;
    }

    Ok(model)
}

/// Train one model per configuration, keyed by each corpus's language.
///
/// Each language is scored with its configuration's `[scorer]` settings. A
/// later configuration for the same language replaces the earlier one.
pub fn train_registry(configs: &[SentimentConfig]) -> CorpusResult<ModelRegistry> {
    let mut registry = ModelRegistry::new();
    for config in configs {
        let model = train_with_config(config)?;
        registry.insert(config.corpus.language, model);
        registry.set_config(config.corpus.language, config.scorer);
    }
    Ok(registry)
}
