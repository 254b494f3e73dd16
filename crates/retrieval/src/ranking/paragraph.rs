//! Cosine-similarity paragraph ranking.

use crate::index::CorpusIndex;
use crate::similarity::{descending, norm};
use crate::types::{QueryVector, RankedParagraph};

/// Number of paragraphs handed to sentence ranking.
pub const TOP_PARAGRAPHS: usize = 3;

/// Rank paragraphs against a query vector and keep the best three.
///
/// Ordering is by (score, index) descending. Returns an empty selection
/// when no query term is known to the corpus.
pub fn rank(index: &CorpusIndex, query: &QueryVector) -> Vec<RankedParagraph> {
    let query_norm = query_norm(index, query);
    if query_norm == 0.0 {
        tracing::debug!("No query term is known to the corpus");
        return Vec::new();
    }

    let mut ranking: Vec<RankedParagraph> = (0..index.total_paragraphs())
        .map(|paragraph| RankedParagraph {
            index: paragraph,
            score: similarity(index, paragraph, query, query_norm),
        })
        .collect();

    ranking.sort_by(|a, b| descending(a.score, b.score).then_with(|| b.index.cmp(&a.index)));
    ranking.truncate(TOP_PARAGRAPHS);

    tracing::debug!("Top paragraphs: {:?}", ranking);
    ranking
}

/// √Σ (queryFreq × idf)² over query terms present in the corpus.
pub fn query_norm(index: &CorpusIndex, query: &QueryVector) -> f64 {
    norm(
        query
            .iter()
            .filter_map(|(term, &freq)| index.idf(term).map(|idf| freq as f64 * idf)),
    )
}

/// Cosine similarity between one paragraph and the query.
///
/// The dot product weights each shared term by `queryFreq × tf × idf²`
/// rather than using the stored TFIDF vector; rankings depend on it.
pub fn similarity(
    index: &CorpusIndex,
    paragraph: usize,
    query: &QueryVector,
    query_norm: f64,
) -> f64 {
    let Some(tf) = index.term_frequency(paragraph) else {
        return 0.0;
    };

    let idf = |term: &str| index.idf(term).unwrap_or(0.0);

    let paragraph_norm = norm(tf.iter().map(|(term, &count)| count as f64 * idf(term)));
    if paragraph_norm == 0.0 {
        return 0.0;
    }

    let dot: f64 = query
        .iter()
        .filter_map(|(term, &freq)| {
            tf.get(term).map(|&count| {
                let weight = idf(term);
                freq as f64 * count as f64 * weight * weight
            })
        })
        .sum();

    dot / (paragraph_norm * query_norm)
}
