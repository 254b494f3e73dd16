//! Candidate sentence ranking.
//!
//! Long questions are compared by n-gram Jaccard similarity; short ones by
//! the share of query terms found among the sentence's stems.

use crate::annotate::{Annotator, EnglishStemmer, Stemmer};
use crate::similarity::{descending, jaccard, ngrams};
use crate::types::{QueryVector, RankedSentence};
use std::collections::HashSet;
use std::sync::Arc;

/// Default n for the n-gram strategy.
pub const DEFAULT_NGRAM_SIZE: usize = 1;

/// Ranks sentences with a fixed English stemmer, whatever the index uses.
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    annotator: Arc<dyn Annotator>,
    stemmer: Arc<dyn Stemmer>,
}

impl SentenceRanker {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self {
            annotator,
            stemmer: Arc::new(EnglishStemmer::new()),
        }
    }

    /// Score every sentence and order by (score, text) descending.
    pub fn rank(
        &self,
        sentences: &[String],
        question: &str,
        query: &QueryVector,
        n: usize,
    ) -> Vec<RankedSentence> {
        let question_tokens = self.stemmed_tokens(question);
        let use_ngrams = question_tokens.len() > n.saturating_add(1);

        tracing::debug!(
            "Ranking {} sentences by {}",
            sentences.len(),
            if use_ngrams { "n-gram similarity" } else { "stem overlap" }
        );

        let mut ranked: Vec<RankedSentence> = sentences
            .iter()
            .map(|sentence| {
                let score = if use_ngrams {
                    self.ngram_similarity(sentence, &question_tokens, n)
                } else {
                    self.stem_overlap(sentence, query)
                };
                RankedSentence {
                    text: sentence.clone(),
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| descending(a.score, b.score).then_with(|| b.text.cmp(&a.text)));
        ranked
    }

    /// Jaccard similarity of the stemmed n-gram sets of sentence and question.
    pub fn ngram_similarity(&self, sentence: &str, question_tokens: &[String], n: usize) -> f64 {
        if question_tokens.len() <= n {
            return 0.0;
        }

        let sentence_grams = ngrams(&self.stemmed_tokens(sentence), n);
        if sentence_grams.len() < n {
            return 0.0;
        }

        jaccard(&sentence_grams, &ngrams(question_tokens, n))
    }

    /// hits / (sentence tokens × query terms), where a hit is a query term
    /// whose stem occurs among the sentence's stems.
    pub fn stem_overlap(&self, sentence: &str, query: &QueryVector) -> f64 {
        let sentence_stems = self.stemmed_tokens(sentence);
        let denominator = sentence_stems.len() * query.len();
        if denominator == 0 {
            return 0.0;
        }

        let present: HashSet<&str> = sentence_stems.iter().map(String::as_str).collect();
        let hits = query
            .keys()
            .filter(|term| present.contains(self.stemmer.stem(term).as_str()))
            .count();

        hits as f64 / denominator as f64
    }

    /// Tokenize and stem; stems are lowercase.
    pub fn stemmed_tokens(&self, text: &str) -> Vec<String> {
        self.annotator
            .tokenize(text)
            .iter()
            .map(|token| self.stemmer.stem(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::HeuristicAnnotator;

    fn ranker() -> SentenceRanker {
        SentenceRanker::new(Arc::new(HeuristicAnnotator::new()))
    }

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn query(terms: &[&str]) -> QueryVector {
        terms.iter().map(|t| (t.to_string(), 1)).collect()
    }

    #[test]
    fn test_long_question_uses_ngrams() {
        let ranked = ranker().rank(
            &sentences(&["Berlin is the capital of Germany.", "Paris is the capital of France."]),
            "Where is the capital of France?",
            &query(&["capit", "franc", "?"]),
            1,
        );

        assert_eq!(ranked[0].text, "Paris is the capital of France.");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_short_question_uses_stem_overlap() {
        let r = ranker();
        let q = query(&["rivers"]);
        let ranked = r.rank(
            &sentences(&["Mountains are tall.", "The river flows."]),
            "Rivers?",
            &q,
            1,
        );

        assert_eq!(ranked[0].text, "The river flows.");
        // One hit over four sentence tokens and one query term
        assert!((ranked[0].score - 0.25).abs() < 1e-12);
        assert_eq!(ranked[1].score, 0.0);
    }

    #[test]
    fn test_ties_order_by_text_descending() {
        let ranked = ranker().rank(
            &sentences(&["Alpha.", "Gamma.", "Beta."]),
            "Delta?",
            &query(&["delta"]),
            1,
        );
        let order: Vec<&str> = ranked.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(order, vec!["Gamma.", "Beta.", "Alpha."]);
    }

    #[test]
    fn test_ngram_similarity_bounds() {
        let r = ranker();
        let question = r.stemmed_tokens("the cat sat on the mat");

        assert_eq!(r.ngram_similarity("the cat sat on the mat", &question, 2), 1.0);
        assert_eq!(r.ngram_similarity("dogs bark loudly", &question, 2), 0.0);
        // Sentence shorter than n
        assert_eq!(r.ngram_similarity("cat", &question, 3), 0.0);
        // Question not longer than n
        assert_eq!(r.ngram_similarity("the cat", &r.stemmed_tokens("cat"), 1), 0.0);
    }

    #[test]
    fn test_huge_ngram_size_falls_back_to_stem_overlap() {
        let ranked = ranker().rank(
            &sentences(&["Mountains are tall.", "The river flows."]),
            "Where does the river flow?",
            &query(&["river", "flow"]),
            usize::MAX,
        );

        assert_eq!(ranked[0].text, "The river flows.");
        // Two hits over four sentence tokens and two query terms
        assert!((ranked[0].score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_stem_overlap_empty_inputs() {
        let r = ranker();
        assert_eq!(r.stem_overlap("", &query(&["cat"])), 0.0);
        assert_eq!(r.stem_overlap("The cat.", &QueryVector::new()), 0.0);
    }

    #[test]
    fn test_stems_are_lowercase() {
        assert_eq!(ranker().stemmed_tokens("Running Dogs"), vec!["run", "dog"]);
    }
}
