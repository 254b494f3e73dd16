//! Stemming capabilities.

use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// Morphological normalizer mapping inflected forms to a shared root.
pub trait Stemmer: Send + Sync + std::fmt::Debug {
    fn stem(&self, token: &str) -> String;
}

/// Snowball English stemmer (Porter2) over lowercased input.
///
/// Porter2 revises the classic Porter rules, so some stems differ from the
/// 1980 algorithm: "generously" stems to "generous", not "gener".
pub struct EnglishStemmer {
    inner: SnowballStemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(&token.to_lowercase()).into_owned()
    }
}

/// Null stemming mode: identity plus lowercasing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowercaseStemmer;

impl Stemmer for LowercaseStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_collapses_inflections() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("running"), stemmer.stem("runs"));
        assert_eq!(stemmer.stem("Capitals"), stemmer.stem("capital"));
    }

    #[test]
    fn test_english_lowercases() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("Hamlet"), "hamlet");
    }

    #[test]
    fn test_english_uses_porter2_rules() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("generously"), "generous");
    }

    #[test]
    fn test_lowercase_stemmer_is_identity_plus_lowercase() {
        assert_eq!(LowercaseStemmer.stem("Running"), "running");
        assert_eq!(LowercaseStemmer.stem("?"), "?");
    }
}
