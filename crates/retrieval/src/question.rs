//! Question processing: classification, search query and query vector.

use crate::analyzer::TermAnalyzer;
use crate::annotate::{chunks, Annotator, TaggedToken};
use crate::types::{AnswerType, ProcessedQuestion, QuestionType};
use std::sync::Arc;

const YES_NO_OPENERS: &[&str] = &["is", "are", "can", "should"];
const COPULAS: &[&str] = &["is", "are", "was", "were"];
const LOCATION_NOUNS: &[&str] = &["city", "place", "country"];
const ORGANIZATION_NOUNS: &[&str] = &["company", "industry", "organization"];
const QUANTITY_WORDS: &[&str] = &["few", "great", "little", "many", "much"];
const MEASURE_WORDS: &[&str] = &["tall", "wide", "big", "far"];

/// Turns raw question text into a [`ProcessedQuestion`].
///
/// The query vector goes through the same [`TermAnalyzer`] as the corpus
/// index, so both sides share one normalization policy.
#[derive(Debug, Clone)]
pub struct QuestionProcessor {
    analyzer: TermAnalyzer,
    use_synonyms: bool,
}

impl QuestionProcessor {
    pub fn new(analyzer: TermAnalyzer, use_synonyms: bool) -> Self {
        Self {
            analyzer,
            use_synonyms,
        }
    }

    pub fn annotator(&self) -> &Arc<dyn Annotator> {
        self.analyzer.annotator()
    }

    pub fn process(&self, question: &str) -> ProcessedQuestion {
        let annotator = self.analyzer.annotator();
        let tokens = annotator.tokenize(question);
        let tagged = annotator.pos_tag(&tokens).unwrap_or_else(|e| {
            tracing::warn!("POS tagging failed for question {:?}: {}", question, e);
            tokens.iter().map(|t| TaggedToken::new(t.as_str(), "")).collect()
        });

        let question_type = question_type(&tagged);
        let (answer_type, rewritten) = answer_type(&tagged);
        let search_query = self.search_query(&tagged);
        let query_vector = self.analyzer.query_vector(&search_query);

        tracing::debug!(
            "Processed question: type={:?}, answer={}, query={:?}",
            question_type,
            answer_type,
            search_query
        );

        ProcessedQuestion {
            question: rewritten.unwrap_or_else(|| question.to_string()),
            question_type,
            search_query,
            query_vector,
            answer_type,
        }
    }

    /// Tokens other than wh-words, each followed by its synonyms when enabled.
    fn search_query(&self, tagged: &[TaggedToken]) -> Vec<String> {
        let annotator = self.analyzer.annotator();
        tagged
            .iter()
            .filter(|t| QuestionType::from_tag(&t.tag).is_none())
            .flat_map(|t| {
                let synonyms = if self.use_synonyms {
                    annotator.synonyms(&t.token)
                } else {
                    Vec::new()
                };
                std::iter::once(t.token.clone()).chain(synonyms)
            })
            .collect()
    }
}

/// Classify by the wh-tags present in the question.
pub fn question_type(tagged: &[TaggedToken]) -> QuestionType {
    let wh_tags: Vec<QuestionType> = tagged
        .iter()
        .filter_map(|t| QuestionType::from_tag(&t.tag))
        .collect();

    match wh_tags.as_slice() {
        [] => QuestionType::None,
        [single] => *single,
        _ => QuestionType::Complex,
    }
}

/// Expected answer type, plus the rewritten question for definitions.
pub fn answer_type(tagged: &[TaggedToken]) -> (AnswerType, Option<String>) {
    let Some(wh_position) = tagged
        .iter()
        .position(|t| QuestionType::from_tag(&t.tag).is_some())
    else {
        let opener = tagged.first().map(|t| t.token.to_lowercase());
        let answer = if opener.is_some_and(|w| YES_NO_OPENERS.contains(&w.as_str())) {
            AnswerType::YesNo
        } else {
            AnswerType::Full
        };
        return (answer, None);
    };

    match tagged[wh_position].token.to_lowercase().as_str() {
        "who" => (AnswerType::Person, None),
        "where" => (AnswerType::Location, None),
        "when" => (AnswerType::Date, None),
        "what" => what_answer_type(tagged),
        "how" => {
            let next = tagged
                .get(wh_position + 1)
                .map(|t| t.token.to_lowercase())
                .unwrap_or_default();
            let answer = if QUANTITY_WORDS.contains(&next.as_str()) {
                AnswerType::Quantity
            } else if MEASURE_WORDS.contains(&next.as_str()) {
                AnswerType::LinearMeasure
            } else {
                AnswerType::Full
            };
            (answer, None)
        }
        _ => (AnswerType::Full, None),
    }
}

fn what_answer_type(tagged: &[TaggedToken]) -> (AnswerType, Option<String>) {
    // "What is X?" chunks as [What] [is] [X] [?]
    let chunked = chunks::continuous(tagged);
    if let [subject, copula, noun, _] = chunked.as_slice() {
        if COPULAS.contains(&copula.token.to_lowercase().as_str()) && noun.tag.starts_with("NN")
        {
            let rewritten = format!("{} {} {}", subject.token, noun.token, copula.token);
            return (AnswerType::Definition, Some(rewritten));
        }
    }

    for t in tagged {
        let word = t.token.to_lowercase();
        if LOCATION_NOUNS.contains(&word.as_str()) {
            return (AnswerType::Location, None);
        }
        if ORGANIZATION_NOUNS.contains(&word.as_str()) {
            return (AnswerType::Organization, None);
        }
        if matches!(t.tag.as_str(), "NN" | "NNS" | "NNP" | "NNPS") {
            return (AnswerType::Full, None);
        }
    }
    (AnswerType::Full, None)
}
