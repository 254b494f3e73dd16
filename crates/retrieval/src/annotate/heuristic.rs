//! Lexicon and rule based annotator for local, offline operation.

use super::lexicon::{
    CLOSED_CLASS_TAGS, LOCATIONS, OF_CONNECTING_MARKERS, ORGANIZATION_MARKERS, PERSON_TITLES,
};
use super::{dates, Annotator, NerNode, TaggedToken};
use factoid_core::{AppError, AppResult};
use std::collections::HashMap;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Deterministic annotator built on Unicode segmentation and word lists.
///
/// Tagging follows the Penn Treebank tagset closely enough for answer-type
/// routing and entity extraction: closed-class words come from a lexicon,
/// capitalized words are proper nouns, and open-class words fall back to
/// suffix rules. Entities are maximal runs of proper nouns labeled through a
/// small gazetteer.
#[derive(Debug, Default, Clone)]
pub struct HeuristicAnnotator {
    thesaurus: HashMap<String, Vec<String>>,
}

impl HeuristicAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a thesaurus used by [`Annotator::synonyms`]; keys are matched lowercase.
    pub fn with_thesaurus(mut self, thesaurus: HashMap<String, Vec<String>>) -> Self {
        self.thesaurus = thesaurus
            .into_iter()
            .map(|(word, alternates)| (word.to_lowercase(), alternates))
            .collect();
        self
    }

    /// Load a YAML thesaurus mapping each word to its alternate forms.
    pub fn load_thesaurus(path: &Path) -> AppResult<HashMap<String, Vec<String>>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read thesaurus {:?}: {}", path, e))
        })?;
        let thesaurus: HashMap<String, Vec<String>> = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded thesaurus with {} entries from {:?}", thesaurus.len(), path);
        Ok(thesaurus)
    }

    fn tag_token(token: &str, sentence_start: bool) -> &'static str {
        if !token.chars().any(char::is_alphanumeric) {
            return punctuation_tag(token);
        }

        if is_number(token) {
            return "CD";
        }

        let lower = token.to_lowercase();
        if let Some(tag) = CLOSED_CLASS_TAGS.get(lower.as_str()) {
            return *tag;
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        if !capitalized {
            return suffix_tag(&lower);
        }

        // A capitalized first word is only a proper noun when nothing else fits
        if sentence_start {
            let by_suffix = suffix_tag(&lower);
            if !matches!(by_suffix, "NN" | "NNS") {
                return by_suffix;
            }
        }

        "NNP"
    }

    fn label_entity(tokens: &[String], previous: Option<&str>) -> &'static str {
        let phrase = tokens.join(" ");
        let first = tokens.first().map(String::as_str).unwrap_or_default();

        if LOCATIONS.contains(phrase.as_str()) {
            return "GPE";
        }
        if tokens.iter().any(|t| ORGANIZATION_MARKERS.contains(t.as_str()))
            || tokens.iter().all(|t| is_acronym(t))
        {
            return "ORGANIZATION";
        }
        if PERSON_TITLES.contains(first) || previous.is_some_and(|p| PERSON_TITLES.contains(p)) {
            return "PERSON";
        }
        if tokens.iter().all(|t| LOCATIONS.contains(t.as_str())) {
            return "GPE";
        }
        "PERSON"
    }
}

impl Annotator for HeuristicAnnotator {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();
        let mut continues = false;

        for segment in text
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let last = sentences.last_mut().filter(|_| continues);
            if let Some(last) = last {
                last.push(' ');
                last.push_str(segment);
            } else {
                sentences.push(segment.to_string());
            }
            continues = ends_with_abbreviation(segment);
        }

        sentences
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    fn pos_tag(&self, tokens: &[String]) -> AppResult<Vec<TaggedToken>> {
        let mut sentence_start = true;
        let mut previous: Option<&str> = None;
        let tagged = tokens
            .iter()
            .map(|token| {
                let tag = Self::tag_token(token, sentence_start);
                sentence_start = tag == "." && !previous.is_some_and(is_abbreviation);
                previous = Some(token.as_str());
                TaggedToken::new(token.as_str(), tag)
            })
            .collect();
        Ok(tagged)
    }

    fn ner_chunk(&self, tagged: &[TaggedToken]) -> AppResult<Vec<NerNode>> {
        let mut nodes = Vec::with_capacity(tagged.len());
        let mut i = 0;

        while i < tagged.len() {
            if !is_proper_noun(&tagged[i]) {
                nodes.push(NerNode::Token(tagged[i].clone()));
                i += 1;
                continue;
            }

            // "Dr. Ada Lovelace": the abbreviated title stays outside the name
            if PERSON_TITLES.contains(tagged[i].token.as_str())
                && tagged.get(i + 1).is_some_and(|t| t.token == ".")
                && tagged.get(i + 2).is_some_and(is_proper_noun)
            {
                nodes.push(NerNode::Token(tagged[i].clone()));
                nodes.push(NerNode::Token(tagged[i + 1].clone()));
                i += 2;
            }

            let start = i;
            while i < tagged.len() {
                if is_proper_noun(&tagged[i]) {
                    i += 1;
                } else if tagged[i].token == "of"
                    && i > start
                    && OF_CONNECTING_MARKERS.contains(tagged[i - 1].token.as_str())
                    && tagged.get(i + 1).is_some_and(is_proper_noun)
                {
                    i += 1;
                } else {
                    break;
                }
            }

            let tokens: Vec<String> = tagged[start..i].iter().map(|t| t.token.clone()).collect();
            let previous = preceding_word(&tagged[..start]);
            let label = Self::label_entity(&tokens, previous);
            nodes.push(NerNode::Entity {
                label: label.to_string(),
                tokens,
            });
        }

        Ok(nodes)
    }

    fn extract_dates(&self, sentence: &str) -> AppResult<Vec<String>> {
        Ok(dates::extract(sentence))
    }

    fn synonyms(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        self.thesaurus
            .get(&lower)
            .map(|alternates| {
                alternates
                    .iter()
                    .map(|a| a.to_lowercase())
                    .filter(|a| *a != lower)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Title or initial whose trailing period does not end a sentence.
fn is_abbreviation(word: &str) -> bool {
    PERSON_TITLES.contains(word)
        || (word.chars().count() == 1 && word.chars().all(char::is_uppercase))
}

fn ends_with_abbreviation(segment: &str) -> bool {
    segment
        .strip_suffix('.')
        .and_then(|rest| rest.rsplit(|c: char| !c.is_alphanumeric()).next())
        .is_some_and(is_abbreviation)
}

/// Last word before an entity, looking through an abbreviation's period.
fn preceding_word(before: &[TaggedToken]) -> Option<&str> {
    match before {
        [.., word, period] if period.token == "." && is_abbreviation(&word.token) => {
            Some(word.token.as_str())
        }
        [.., last] => Some(last.token.as_str()),
        [] => None,
    }
}

fn is_proper_noun(tagged: &TaggedToken) -> bool {
    matches!(tagged.tag.as_str(), "NNP" | "NNPS")
}

fn is_number(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
}

fn is_acronym(token: &str) -> bool {
    token.chars().count() >= 2 && token.chars().all(|c| c.is_ascii_uppercase())
}

fn punctuation_tag(token: &str) -> &'static str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "\u{2013}" | "\u{2014}" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "'" | "\u{201c}" | "\u{201d}" | "\u{2018}" | "\u{2019}" => "''",
        "$" => "$",
        _ => "SYM",
    }
}

fn suffix_tag(lower: &str) -> &'static str {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        "RB"
    } else if len > 4 && lower.ends_with("ing") {
        "VBG"
    } else if len > 3 && lower.ends_with("ed") {
        "VBD"
    } else if len > 4
        && ["ous", "ful", "ive", "able", "ible", "ical", "less", "ish"]
            .iter()
            .any(|s| lower.ends_with(s))
    {
        "JJ"
    } else if len > 3 && lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us")
    {
        "NNS"
    } else {
        "NN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotator() -> HeuristicAnnotator {
        HeuristicAnnotator::new()
    }

    fn tags(text: &str) -> Vec<(String, String)> {
        let a = annotator();
        a.pos_tag(&a.tokenize(text))
            .unwrap()
            .into_iter()
            .map(|t| (t.token, t.tag))
            .collect()
    }

    #[test]
    fn test_split_sentences() {
        let sentences =
            annotator().split_sentences("Paris is the capital of France. Berlin is in Germany.");
        assert_eq!(
            sentences,
            vec!["Paris is the capital of France.", "Berlin is in Germany."]
        );
    }

    #[test]
    fn test_split_sentences_keeps_titles_with_names() {
        let sentences = annotator().split_sentences(
            "The novel was written by Dr. Ada Lovelace in London. It sold well.",
        );
        assert_eq!(
            sentences,
            vec![
                "The novel was written by Dr. Ada Lovelace in London.",
                "It sold well."
            ]
        );
    }

    #[test]
    fn test_split_sentences_keeps_initials_with_names() {
        let sentences =
            annotator().split_sentences("The poem is by T. S. Eliot. He was born in 1888.");
        assert_eq!(
            sentences,
            vec!["The poem is by T. S. Eliot.", "He was born in 1888."]
        );
    }

    #[test]
    fn test_abbreviated_title_is_not_the_person() {
        let a = annotator();
        let tagged = a
            .pos_tag(&a.tokenize("The novel was written by Dr. Ada Lovelace in London."))
            .unwrap();
        let entities: Vec<(String, String)> = a
            .ner_chunk(&tagged)
            .unwrap()
            .into_iter()
            .filter_map(|node| match node {
                NerNode::Entity { label, tokens } => Some((label, tokens.join(" "))),
                NerNode::Token(_) => None,
            })
            .collect();

        assert_eq!(
            entities,
            vec![
                ("PERSON".to_string(), "Ada Lovelace".to_string()),
                ("GPE".to_string(), "London".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        assert_eq!(
            annotator().tokenize("Where is the capital of France?"),
            vec!["Where", "is", "the", "capital", "of", "France", "?"]
        );
    }

    #[test]
    fn test_pos_tag_question() {
        let tagged = tags("Who wrote Hamlet?");
        assert_eq!(tagged[0].1, "WP");
        assert_eq!(tagged[1].1, "VBD");
        assert_eq!(tagged[2].1, "NNP");
        assert_eq!(tagged[3].1, ".");
    }

    #[test]
    fn test_pos_tag_open_class() {
        let tagged = tags("the quickly running dogs walked 42 famous miles");
        let only_tags: Vec<&str> = tagged.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(
            only_tags,
            vec!["DT", "RB", "VBG", "NNS", "VBD", "CD", "JJ", "NNS"]
        );
    }

    #[test]
    fn test_sentence_initial_capital_uses_lexicon() {
        let tagged = tags("The iPod was released. Apple sold it.");
        assert_eq!(tagged[0].1, "DT");
        assert_eq!(tagged[5].0, "Apple");
        assert_eq!(tagged[5].1, "NNP");
    }

    #[test]
    fn test_ner_labels() {
        let a = annotator();
        let tagged = a
            .pos_tag(&a.tokenize(
                "William Shakespeare visited Paris with Mr Smith and the University of Oxford.",
            ))
            .unwrap();
        let entities: Vec<(String, String)> = a
            .ner_chunk(&tagged)
            .unwrap()
            .into_iter()
            .filter_map(|node| match node {
                NerNode::Entity { label, tokens } => Some((label, tokens.join(" "))),
                NerNode::Token(_) => None,
            })
            .collect();

        assert_eq!(
            entities,
            vec![
                ("PERSON".to_string(), "William Shakespeare".to_string()),
                ("GPE".to_string(), "Paris".to_string()),
                ("PERSON".to_string(), "Mr Smith".to_string()),
                ("ORGANIZATION".to_string(), "University of Oxford".to_string()),
            ]
        );
    }

    #[test]
    fn test_ner_acronym_is_organization() {
        let a = annotator();
        let tagged = a.pos_tag(&a.tokenize("He joined NASA in 1990.")).unwrap();
        let nodes = a.ner_chunk(&tagged).unwrap();
        assert!(nodes.contains(&NerNode::Entity {
            label: "ORGANIZATION".to_string(),
            tokens: vec!["NASA".to_string()],
        }));
    }

    #[test]
    fn test_synonyms_from_thesaurus() {
        let mut thesaurus = HashMap::new();
        thesaurus.insert(
            "Capital".to_string(),
            vec!["capital".to_string(), "Metropolis".to_string()],
        );
        let a = HeuristicAnnotator::new().with_thesaurus(thesaurus);
        assert_eq!(a.synonyms("CAPITAL"), vec!["metropolis".to_string()]);
        assert!(a.synonyms("river").is_empty());
    }

    #[test]
    fn test_load_thesaurus() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("thesaurus.yaml");
        std::fs::write(&path, "car:\n  - automobile\n  - auto\n").unwrap();

        let thesaurus = HeuristicAnnotator::load_thesaurus(&path).unwrap();
        assert_eq!(thesaurus["car"], vec!["automobile", "auto"]);
    }

    #[test]
    fn test_extract_dates_delegates() {
        let dates = annotator()
            .extract_dates("The iPod launched on October 23, 2001.")
            .unwrap();
        assert_eq!(dates, vec!["October 23, 2001"]);
    }
}
