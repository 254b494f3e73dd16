//! Factoid question answering over a paragraph corpus.
//!
//! Paragraphs are indexed with a bag-of-words TFIDF model. A question is
//! classified by expected answer type, the best paragraphs are found by
//! cosine similarity, their sentences are ranked, and a typed answer span is
//! extracted from the ranked sentences.

pub mod analyzer;
pub mod annotate;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod eval;
pub mod extract;
pub mod index;
pub mod question;
pub mod ranking;
pub mod similarity;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use annotate::{Annotator, HeuristicAnnotator, NerNode, Stemmer, TaggedToken};
pub use config::RetrievalConfig;
pub use engine::{AnswerTrace, QaEngine, SharedEngine};
pub use extract::NO_ANSWER;
pub use index::CorpusIndex;
pub use types::{
    AnswerType, ProcessedQuestion, QueryVector, QuestionType, RankedParagraph, RankedSentence,
    TermFrequencyMap,
};

use factoid_core::AppResult;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Build the default annotator for `config`, loading its thesaurus if set.
pub fn default_annotator(config: &RetrievalConfig) -> AppResult<Arc<dyn Annotator>> {
    let thesaurus = match &config.thesaurus {
        Some(path) => HeuristicAnnotator::load_thesaurus(path)?,
        None => HashMap::new(),
    };
    Ok(Arc::new(HeuristicAnnotator::new().with_thesaurus(thesaurus)))
}

/// Load a corpus and build an engine over it in one step.
pub fn open_engine(corpus: &Path, config: RetrievalConfig) -> AppResult<QaEngine> {
    let annotator = default_annotator(&config)?;
    let paragraphs = dataset::load_paragraphs(corpus)?;
    Ok(QaEngine::construct(paragraphs, config, annotator))
}
