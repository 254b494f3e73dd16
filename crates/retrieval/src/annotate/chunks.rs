//! Continuous POS chunking.

use super::TaggedToken;

/// Group tagged tokens into runs of identical tag.
///
/// A run tagged DT or JJ is a modifier: it absorbs the next token and takes
/// that token's tag, so "the Eiffel Tower" comes out as one NNP chunk.
/// Chunk text joins its tokens with single spaces.
pub fn continuous(tagged: &[TaggedToken]) -> Vec<TaggedToken> {
    let mut chunks = Vec::new();
    let mut current: Option<TaggedToken> = None;

    for next in tagged {
        current = Some(match current.take() {
            None => next.clone(),
            Some(mut chunk) if chunk.tag == next.tag => {
                chunk.token.push(' ');
                chunk.token.push_str(&next.token);
                chunk
            }
            Some(mut chunk) if matches!(chunk.tag.as_str(), "DT" | "JJ") => {
                chunk.token.push(' ');
                chunk.token.push_str(&next.token);
                chunk.tag = next.tag.clone();
                chunk
            }
            Some(chunk) => {
                chunks.push(chunk);
                next.clone()
            }
        });
    }

    chunks.extend(current);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(t, g)| TaggedToken::new(*t, *g)).collect()
    }

    #[test]
    fn test_runs_of_equal_tag() {
        let chunks = continuous(&tagged(&[
            ("New", "NNP"),
            ("York", "NNP"),
            ("is", "VBZ"),
            ("big", "JJ"),
            (".", "."),
        ]));
        assert_eq!(
            chunks,
            tagged(&[("New York", "NNP"), ("is", "VBZ"), ("big .", ".")])
        );
    }

    #[test]
    fn test_determiner_absorbs_next_token() {
        let chunks = continuous(&tagged(&[
            ("visit", "VB"),
            ("the", "DT"),
            ("Eiffel", "NNP"),
            ("Tower", "NNP"),
        ]));
        assert_eq!(chunks, tagged(&[("visit", "VB"), ("the Eiffel Tower", "NNP")]));
    }

    #[test]
    fn test_empty_input() {
        assert!(continuous(&[]).is_empty());
    }
}
