//! Term analysis shared by the corpus index and query processing.
//!
//! Both sides of a comparison must go through the same analyzer: a query
//! vector normalized differently from the index silently loses matches.

use crate::annotate::{stopwords, Annotator, LowercaseStemmer, EnglishStemmer, Stemmer};
use crate::config::RetrievalConfig;
use crate::types::{QueryVector, TermFrequencyMap};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

// Prefix match: a token is indexable when it starts with one of these characters.
static INDEXABLE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_\\/.']").expect("token pattern is valid"));

/// Tokenizes, filters and normalizes text into terms.
#[derive(Debug, Clone)]
pub struct TermAnalyzer {
    annotator: Arc<dyn Annotator>,
    normalizer: Arc<dyn Stemmer>,
    stopwords: Arc<HashSet<String>>,
    remove_stop_words: bool,
}

impl TermAnalyzer {
    /// Build the analyzer described by `config`: English stemming or plain
    /// lowercasing, with or without English stopword removal.
    pub fn new(annotator: Arc<dyn Annotator>, config: &RetrievalConfig) -> Self {
        let normalizer: Arc<dyn Stemmer> = if config.use_stemmer {
            Arc::new(EnglishStemmer::new())
        } else {
            Arc::new(LowercaseStemmer)
        };
        Self::with_normalizer(annotator, normalizer, config.remove_stop_words)
    }

    pub fn with_normalizer(
        annotator: Arc<dyn Annotator>,
        normalizer: Arc<dyn Stemmer>,
        remove_stop_words: bool,
    ) -> Self {
        Self {
            annotator,
            normalizer,
            stopwords: Arc::new(stopwords::english()),
            remove_stop_words,
        }
    }

    pub fn annotator(&self) -> &Arc<dyn Annotator> {
        &self.annotator
    }

    /// True when stopword removal is on and the lowercased token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.remove_stop_words && self.stopwords.contains(&token.to_lowercase())
    }

    pub fn normalize(&self, token: &str) -> String {
        self.normalizer.stem(token)
    }

    /// Count normalized terms of a paragraph. Filtering happens before
    /// normalization, so stopwords are matched on the surface form.
    pub fn term_frequency(&self, paragraph: &str) -> TermFrequencyMap {
        self.annotator
            .split_sentences(paragraph)
            .iter()
            .flat_map(|sentence| self.annotator.tokenize(sentence))
            .filter(|token| !self.is_stopword(token) && INDEXABLE_TOKEN.is_match(token))
            .fold(TermFrequencyMap::new(), |mut counts, token| {
                *counts.entry(self.normalize(&token)).or_insert(0) += 1;
                counts
            })
    }

    /// Count normalized search-query tokens, dropping stopwords when enabled.
    pub fn query_vector<'a, I>(&self, tokens: I) -> QueryVector
    where
        I: IntoIterator<Item = &'a String>,
    {
        tokens
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .fold(QueryVector::new(), |mut counts, token| {
                *counts.entry(self.normalize(token)).or_insert(0) += 1;
                counts
            })
    }
}
