//! Per-language model dispatch.
//!
//! Language is never detected; callers pass the tag and the registry falls
//! back to English when no model is registered for it.

use crate::{Analysis, Model, Scorer, ScorerConfig, SentimentError, SentimentResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Language tags keyed by their short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "fil")]
    Filipino,
    #[serde(rename = "msa")]
    Malay,
    #[serde(rename = "zh-tw")]
    ChineseTraditional,
    #[serde(rename = "zh-cn")]
    ChineseSimplified,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "fi")]
    Finnish,
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "hu")]
    Hungarian,
    #[serde(rename = "fa")]
    Farsi,
    #[serde(rename = "he")]
    Hebrew,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "th")]
    Thai,
}

const LANGUAGE_CODES: &[(Language, &str)] = &[
    (Language::English, "en"),
    (Language::Spanish, "es"),
    (Language::French, "fr"),
    (Language::German, "de"),
    (Language::Italian, "it"),
    (Language::Arabic, "ar"),
    (Language::Japanese, "ja"),
    (Language::Indonesian, "id"),
    (Language::Portuguese, "pt"),
    (Language::Korean, "ko"),
    (Language::Turkish, "tr"),
    (Language::Russian, "ru"),
    (Language::Dutch, "nl"),
    (Language::Filipino, "fil"),
    (Language::Malay, "msa"),
    (Language::ChineseTraditional, "zh-tw"),
    (Language::ChineseSimplified, "zh-cn"),
    (Language::Hindi, "hi"),
    (Language::Norwegian, "no"),
    (Language::Swedish, "sv"),
    (Language::Finnish, "fi"),
    (Language::Danish, "da"),
    (Language::Polish, "pl"),
    (Language::Hungarian, "hu"),
    (Language::Farsi, "fa"),
    (Language::Hebrew, "he"),
    (Language::Urdu, "ur"),
    (Language::Thai, "th"),
];

impl Language {
    pub fn code(self) -> &'static str {
        LANGUAGE_CODES
            .iter()
            .find(|(language, _)| *language == self)
            .map(|(_, code)| *code)
            .unwrap_or("en")
    }

    /// Look up a tag, ignoring ASCII case (`"EN"`, `"zh-TW"`).
    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGE_CODES
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(code))
            .map(|(language, _)| *language)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| {
            SentimentError::invalid_argument(format!("unknown language tag: {:?}", s))
        })
    }
}

/// Independently trained models, one per language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelRegistry {
    models: BTreeMap<Language, Model>,
    /// Scorer settings for languages that do not use the defaults.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    configs: BTreeMap<Language, ScorerConfig>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, returning the one it replaced.
    pub fn insert(&mut self, language: Language, model: Model) -> Option<Model> {
        self.models.insert(language, model)
    }

    pub fn with_model(mut self, language: Language, model: Model) -> Self {
        self.insert(language, model);
        self
    }

    /// Score `language` with `config` instead of the defaults.
    pub fn set_config(&mut self, language: Language, config: ScorerConfig) {
        self.configs.insert(language, config);
    }

    /// Scorer settings used for `language` when it serves an analysis.
    pub fn config(&self, language: Language) -> ScorerConfig {
        self.configs.get(&language).copied().unwrap_or_default()
    }

    /// The language that would serve `language`: itself if registered,
    /// otherwise English if registered.
    pub fn resolve(&self, language: Language) -> Option<Language> {
        if self.models.contains_key(&language) {
            Some(language)
        } else if self.models.contains_key(&Language::English) {
            Some(Language::English)
        } else {
            None
        }
    }

    pub fn get(&self, language: Language) -> Option<&Model> {
        self.resolve(language)
            .and_then(|resolved| self.models.get(&resolved))
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.models.keys().copied()
    }

    pub fn models(&self) -> impl Iterator<Item = (Language, &Model)> {
        self.models.iter().map(|(language, model)| (*language, model))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Analyze `text` with the model for `language`, falling back to English.
    ///
    /// The returned analysis records the language that actually served it,
    /// and is scored with that language's configured settings.
    pub fn analyze(&self, text: &str, language: Language) -> SentimentResult<Analysis> {
        let resolved = self.resolve_or_fail(language)?;
        self.score(text, resolved, self.config(resolved))
    }

    /// Like [`analyze`](Self::analyze), overriding the configured settings.
    pub fn analyze_with_config(
        &self,
        text: &str,
        language: Language,
        config: ScorerConfig,
    ) -> SentimentResult<Analysis> {
        let resolved = self.resolve_or_fail(language)?;
        self.score(text, resolved, config)
    }

    fn resolve_or_fail(&self, language: Language) -> SentimentResult<Language> {
        self.resolve(language).ok_or_else(|| {
            SentimentError::invalid_state(format!(
                "no model registered for {} and no English fallback",
                language
            ))
        })
    }

    fn score(
        &self,
        text: &str,
        resolved: Language,
        config: ScorerConfig,
    ) -> SentimentResult<Analysis> {
        let model = &self.models[&resolved];

        let mut analysis = Scorer::with_config(model, config)?.analyze(text);
        analysis.language = Some(resolved);
        Ok(analysis)
    }
}
