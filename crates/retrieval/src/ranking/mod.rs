//! Paragraph and sentence ranking.

pub mod paragraph;
pub mod sentence;

pub use paragraph::TOP_PARAGRAPHS;
pub use sentence::{SentenceRanker, DEFAULT_NGRAM_SIZE};
