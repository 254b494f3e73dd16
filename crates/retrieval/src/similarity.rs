//! Vector-space and set similarity helpers shared by the rankers.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Euclidean norm of a sequence of weights.
pub fn norm<I>(weights: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    weights.into_iter().map(|w| w * w).sum::<f64>().sqrt()
}

/// Contiguous n-grams of a token sequence, each joined with a single space.
///
/// Returns an empty set when `n` is zero or exceeds the sequence length.
pub fn ngrams(tokens: &[String], n: usize) -> HashSet<String> {
    if n == 0 {
        return HashSet::new();
    }
    tokens.windows(n).map(|window| window.join(" ")).collect()
}

/// |a ∩ b| / |a ∪ b|, defined as 0 for two empty sets.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Descending order on scores, total over NaN.
pub fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_norm() {
        assert_eq!(norm([3.0, 4.0]), 5.0);
        assert_eq!(norm(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_ngrams() {
        let grams = ngrams(&tokens("a b c a b"), 2);
        assert_eq!(grams.len(), 3);
        assert!(grams.contains("a b"));
        assert!(grams.contains("b c"));
        assert!(grams.contains("c a"));
    }

    #[test]
    fn test_ngrams_too_short() {
        assert!(ngrams(&tokens("a b"), 3).is_empty());
        assert!(ngrams(&tokens("a b"), 0).is_empty());
    }

    #[test]
    fn test_jaccard() {
        let a = ngrams(&tokens("x y z"), 1);
        let b = ngrams(&tokens("y z w"), 1);
        assert_eq!(jaccard(&a, &b), 0.5);
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(jaccard(&HashSet::new(), &HashSet::new()), 0.0);
    }

    #[test]
    fn test_descending() {
        let mut scores = vec![0.1, 0.9, 0.5];
        scores.sort_by(|a, b| descending(*a, *b));
        assert_eq!(scores, vec![0.9, 0.5, 0.1]);
    }
}
