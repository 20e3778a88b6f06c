//! Text normalization applied before training and scoring.
//!
//! Everything downstream assumes normalized input: lowercase ASCII letters,
//! digits, spaces and tabs, with no leading or trailing whitespace.

/// Turns raw text into the normalized form the model is trained on.
///
/// Implementations must never fail; text they cannot handle is passed
/// through best-effort.
pub trait Normalizer {
    fn clean(&self, raw: &str) -> String;
}

/// Default normalizer: keeps ASCII alphanumerics, spaces and tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiNormalizer;

impl AsciiNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for AsciiNormalizer {
    fn clean(&self, raw: &str) -> String {
        let kept: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '\t')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        kept.trim().to_string()
    }
}

/// Normalize with [`AsciiNormalizer`].
pub fn clean(raw: &str) -> String {
    AsciiNormalizer.clean(raw)
}

/// Split normalized text into tokens on single spaces.
///
/// Runs of spaces do not produce empty tokens.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|token| !token.is_empty())
}
