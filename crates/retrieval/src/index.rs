//! In-memory TFIDF index over a fixed paragraph set.
//!
//! The index is built in one pass from the complete corpus and never
//! mutated afterwards. A changed paragraph set means building a new index.

use crate::analyzer::TermAnalyzer;
use crate::similarity::descending;
use crate::types::TermFrequencyMap;
use serde::Serialize;
use std::collections::HashMap;

/// Term frequencies, smoothed IDF and TFIDF vectors for a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusIndex {
    total_paragraphs: usize,
    term_frequencies: Vec<TermFrequencyMap>,
    idf: HashMap<String, f64>,
    vectors: Vec<HashMap<String, f64>>,
}

impl CorpusIndex {
    /// Build the index for `paragraphs`.
    ///
    /// `idf(t) = ln((N + 1) / df(t))` stays finite and positive even for a
    /// term present in every paragraph. An empty corpus gives an empty index.
    pub fn build(paragraphs: &[String], analyzer: &TermAnalyzer) -> Self {
        let term_frequencies: Vec<TermFrequencyMap> = paragraphs
            .iter()
            .map(|paragraph| analyzer.term_frequency(paragraph))
            .collect();

        let document_frequency = term_frequencies.iter().fold(
            HashMap::<&str, u32>::new(),
            |mut df, tf| {
                for term in tf.keys() {
                    *df.entry(term.as_str()).or_insert(0) += 1;
                }
                df
            },
        );

        let total = paragraphs.len() as f64;
        let idf: HashMap<String, f64> = document_frequency
            .into_iter()
            .map(|(term, df)| (term.to_string(), ((total + 1.0) / df as f64).ln()))
            .collect();

        let vectors = term_frequencies
            .iter()
            .map(|tf| {
                tf.iter()
                    .map(|(term, &count)| (term.clone(), count as f64 * idf[term]))
                    .collect()
            })
            .collect();

        tracing::info!(
            "Built corpus index: {} paragraphs, {} unique terms",
            paragraphs.len(),
            idf.len()
        );

        Self {
            total_paragraphs: paragraphs.len(),
            term_frequencies,
            idf,
            vectors,
        }
    }

    pub fn total_paragraphs(&self) -> usize {
        self.total_paragraphs
    }

    pub fn is_empty(&self) -> bool {
        self.total_paragraphs == 0
    }

    pub fn unique_terms(&self) -> usize {
        self.idf.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn idf_table(&self) -> &HashMap<String, f64> {
        &self.idf
    }

    /// Term-frequency map of one paragraph.
    pub fn term_frequency(&self, paragraph: usize) -> Option<&TermFrequencyMap> {
        self.term_frequencies.get(paragraph)
    }

    /// TFIDF vector of one paragraph.
    pub fn vector(&self, paragraph: usize) -> Option<&HashMap<String, f64>> {
        self.vectors.get(paragraph)
    }

    pub fn term_frequencies(&self) -> &[TermFrequencyMap] {
        &self.term_frequencies
    }

    /// The `k` terms with the highest TFIDF weight in any single paragraph.
    pub fn most_significant_terms(&self, k: usize) -> Vec<(String, f64)> {
        let best = self
            .vectors
            .iter()
            .flat_map(|vector| vector.iter())
            .fold(HashMap::<&str, f64>::new(), |mut best, (term, &weight)| {
                let entry = best.entry(term.as_str()).or_insert(weight);
                if weight > *entry {
                    *entry = weight;
                }
                best
            });

        let mut ranked: Vec<(String, f64)> = best
            .into_iter()
            .map(|(term, weight)| (term.to_string(), weight))
            .collect();
        ranked.sort_by(|a, b| descending(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}
