//! Linguistic annotation service.
//!
//! The retrieval core never tokenizes, tags or stems on its own; it goes
//! through the [`Annotator`] and [`Stemmer`] seams defined here. The default
//! [`HeuristicAnnotator`] is lexicon and rule based so the engine runs
//! offline and deterministically; a statistical tagger can be plugged in
//! behind the same trait.

pub mod chunks;
pub mod dates;
pub mod heuristic;
mod lexicon;
pub mod stemmer;
pub mod stopwords;

pub use heuristic::HeuristicAnnotator;
pub use stemmer::{LowercaseStemmer, EnglishStemmer, Stemmer};

use factoid_core::AppResult;
use serde::{Deserialize, Serialize};

/// A token with its Penn Treebank POS tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// One node of a named-entity chunk sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NerNode {
    /// Labeled entity (PERSON, GPE, ORGANIZATION, ...) covering one or more tokens
    Entity { label: String, tokens: Vec<String> },

    /// Token outside any entity
    Token(TaggedToken),
}

/// Trait for linguistic annotation collaborators.
///
/// Segmentation is infallible; tagging, chunking and date extraction may
/// fail on a given input, and callers treat such failures as local.
pub trait Annotator: Send + Sync + std::fmt::Debug {
    /// Split text into ordered sentences.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Split text into ordered tokens, punctuation included.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Tag tokens with Penn Treebank POS tags.
    fn pos_tag(&self, tokens: &[String]) -> AppResult<Vec<TaggedToken>>;

    /// Group tagged tokens into named-entity chunks.
    fn ner_chunk(&self, tagged: &[TaggedToken]) -> AppResult<Vec<NerNode>>;

    /// Extract date expressions from a sentence, in order of appearance.
    fn extract_dates(&self, sentence: &str) -> AppResult<Vec<String>>;

    /// Alternate forms of a word for query expansion.
    fn synonyms(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}
