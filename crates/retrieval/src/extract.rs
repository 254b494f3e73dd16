//! Answer extraction from ranked sentences.
//!
//! The expected answer type selects a strategy. Every strategy falls back to
//! the top-ranked sentence, so a query with at least one candidate sentence
//! always gets an answer.

use crate::annotate::{chunks, Annotator, NerNode, EnglishStemmer, Stemmer};
use crate::types::{AnswerType, RankedSentence};
use factoid_core::AppResult;
use std::collections::HashSet;
use std::sync::Arc;

/// Response when there is no candidate sentence to answer from.
pub const NO_ANSWER: &str = "I could not find an answer in the available paragraphs.";

/// A contiguous entity span built from NER output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntitySpan {
    /// Label of the first entity node in the span; bare proper nouns carry none
    pub label: Option<String>,
    pub tokens: Vec<String>,
}

impl EntitySpan {
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Picks an answer span out of ranked sentences.
#[derive(Debug, Clone)]
pub struct AnswerExtractor {
    annotator: Arc<dyn Annotator>,
    stemmer: Arc<dyn Stemmer>,
}

impl AnswerExtractor {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self {
            annotator,
            stemmer: Arc::new(EnglishStemmer::new()),
        }
    }

    /// Extract the answer for `question` from `ranked` sentences.
    pub fn extract(
        &self,
        ranked: &[RankedSentence],
        answer_type: AnswerType,
        question: &str,
    ) -> String {
        let Some(top) = ranked.first() else {
            return NO_ANSWER.to_string();
        };

        let found = match answer_type {
            AnswerType::Person => self.entity_answer(ranked, "PERSON", question),
            AnswerType::Location => self.entity_answer(ranked, "GPE", question),
            AnswerType::Organization => self.entity_answer(ranked, "ORGANIZATION", question),
            AnswerType::Date => self.date_answer(ranked),
            AnswerType::Nn => self.chunk_answer(ranked, &["NN", "NNS"], question),
            AnswerType::Nnp => self.chunk_answer(ranked, &["NNP", "NNPS"], question),
            AnswerType::Definition => Ok(None),
            AnswerType::Full
            | AnswerType::Quantity
            | AnswerType::LinearMeasure
            | AnswerType::YesNo => Ok(None),
        };

        match found {
            Ok(Some(answer)) => answer,
            Ok(None) => top.text.clone(),
            Err(e) => {
                tracing::warn!("Annotation failed while extracting {} answer: {}", answer_type, e);
                top.text.clone()
            }
        }
    }

    /// True when no stem of `candidate` occurs among the stems of `question`.
    pub fn passes_overlap_filter(&self, candidate: &str, question: &str) -> bool {
        let question_stems: HashSet<String> = self.lowercase_stems(question).collect();
        self.lowercase_stems(candidate)
            .all(|stem| !question_stems.contains(&stem))
    }

    /// Fold NER output into entity spans.
    pub fn entity_spans(&self, sentence: &str) -> AppResult<Vec<EntitySpan>> {
        let tagged = self.annotator.pos_tag(&self.annotator.tokenize(sentence))?;
        let nodes = self.annotator.ner_chunk(&tagged)?;

        let (mut spans, current) = nodes.into_iter().fold(
            (Vec::new(), EntitySpan::default()),
            |(mut spans, mut current), node| {
                match node {
                    NerNode::Entity { label, tokens } => {
                        current.label.get_or_insert(label);
                        current.tokens.extend(tokens);
                    }
                    NerNode::Token(token) if token.tag == "NNP" => {
                        current.tokens.push(token.token);
                    }
                    NerNode::Token(_) => {
                        if !current.tokens.is_empty() {
                            spans.push(std::mem::take(&mut current));
                        }
                    }
                }
                (spans, current)
            },
        );

        if !current.tokens.is_empty() {
            spans.push(current);
        }
        Ok(spans)
    }

    fn entity_answer(
        &self,
        ranked: &[RankedSentence],
        label: &str,
        question: &str,
    ) -> AppResult<Option<String>> {
        for sentence in ranked {
            for span in self.entity_spans(&sentence.text)? {
                if span.label.as_deref() != Some(label) {
                    continue;
                }
                let text = span.text();
                if self.passes_overlap_filter(&text, question) {
                    tracing::debug!("Accepted {} span {:?}", label, text);
                    return Ok(Some(text));
                }
            }
        }
        Ok(None)
    }

    fn date_answer(&self, ranked: &[RankedSentence]) -> AppResult<Option<String>> {
        let mut dates = Vec::new();
        for sentence in ranked {
            dates.extend(self.annotator.extract_dates(&sentence.text)?);
        }
        Ok(dates.into_iter().next())
    }

    fn chunk_answer(
        &self,
        ranked: &[RankedSentence],
        tags: &[&str],
        question: &str,
    ) -> AppResult<Option<String>> {
        for sentence in ranked {
            let tagged = self
                .annotator
                .pos_tag(&self.annotator.tokenize(&sentence.text))?;
            let accepted = chunks::continuous(&tagged).into_iter().find(|chunk| {
                tags.contains(&chunk.tag.as_str())
                    && self.passes_overlap_filter(&chunk.token, question)
            });
            if let Some(chunk) = accepted {
                return Ok(Some(chunk.token));
            }
        }
        Ok(None)
    }

    fn lowercase_stems<'a>(&'a self, text: &str) -> impl Iterator<Item = String> + 'a {
        self.annotator
            .tokenize(&text.to_lowercase())
            .into_iter()
            .map(move |token| self.stemmer.stem(&token))
    }
}
