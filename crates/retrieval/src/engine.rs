//! Question-answering engine over a fixed paragraph set.

use crate::analyzer::TermAnalyzer;
use crate::annotate::Annotator;
use crate::config::RetrievalConfig;
use crate::extract::{AnswerExtractor, NO_ANSWER};
use crate::index::CorpusIndex;
use crate::question::QuestionProcessor;
use crate::ranking::{paragraph, SentenceRanker};
use crate::types::{ProcessedQuestion, RankedParagraph, RankedSentence};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};

/// Intermediate results of answering one question.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerTrace {
    pub answer: String,
    pub paragraphs: Vec<RankedParagraph>,
    pub sentences: Vec<RankedSentence>,
}

/// Index, rankers and extractor for one corpus.
///
/// Built once from the full paragraph set and read-only afterwards;
/// every query is a pure function of the question and the index.
#[derive(Debug, Clone)]
pub struct QaEngine {
    paragraphs: Vec<String>,
    config: RetrievalConfig,
    index: CorpusIndex,
    questions: QuestionProcessor,
    sentences: SentenceRanker,
    extractor: AnswerExtractor,
}

impl QaEngine {
    /// Build the engine, including its full corpus index.
    pub fn construct(
        paragraphs: Vec<String>,
        config: RetrievalConfig,
        annotator: Arc<dyn Annotator>,
    ) -> Self {
        let analyzer = TermAnalyzer::new(Arc::clone(&annotator), &config);
        let index = CorpusIndex::build(&paragraphs, &analyzer);

        Self {
            questions: QuestionProcessor::new(analyzer, config.use_synonyms),
            sentences: SentenceRanker::new(Arc::clone(&annotator)),
            extractor: AnswerExtractor::new(annotator),
            paragraphs,
            config,
            index,
        }
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Classify a question and build its query vector with this engine's
    /// normalization policy.
    pub fn process_question(&self, text: &str) -> ProcessedQuestion {
        self.questions.process(text)
    }

    /// Answer a processed question. Never fails: an empty corpus or no
    /// matching paragraph yields [`NO_ANSWER`].
    pub fn query(&self, question: &ProcessedQuestion) -> String {
        self.trace(question).answer
    }

    /// Process and answer raw question text.
    pub fn ask(&self, text: &str) -> String {
        self.query(&self.process_question(text))
    }

    /// Answer a processed question and keep the ranked paragraphs and
    /// sentences that led to the answer.
    pub fn trace(&self, question: &ProcessedQuestion) -> AnswerTrace {
        if self.index.is_empty() {
            return AnswerTrace {
                answer: NO_ANSWER.to_string(),
                paragraphs: Vec::new(),
                sentences: Vec::new(),
            };
        }

        let top = paragraph::rank(&self.index, &question.query_vector);
        let annotator = self.questions.annotator();
        let candidates: Vec<String> = top
            .iter()
            .filter_map(|ranked| self.paragraphs.get(ranked.index))
            .flat_map(|text| annotator.split_sentences(text))
            .collect();

        let ranked = self.sentences.rank(
            &candidates,
            &question.question,
            &question.query_vector,
            self.config.ngram_size,
        );
        let answer = self
            .extractor
            .extract(&ranked, question.answer_type, &question.question);

        AnswerTrace {
            answer,
            paragraphs: top,
            sentences: ranked,
        }
    }
}

/// A [`QaEngine`] shared between readers and a rebuilding writer.
///
/// Queries hold the read guard for their whole duration. A rebuild
/// constructs the replacement off-lock and swaps it in under the write
/// guard, so readers see either the old engine or the new one.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<QaEngine>>,
}

impl SharedEngine {
    pub fn new(engine: QaEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Run `f` against the current engine under the read guard.
    pub fn read<R>(&self, f: impl FnOnce(&QaEngine) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn ask(&self, text: &str) -> String {
        self.read(|engine| engine.ask(text))
    }

    pub fn query(&self, question: &ProcessedQuestion) -> String {
        self.read(|engine| engine.query(question))
    }

    /// Replace the paragraph set, keeping configuration and annotator.
    pub fn rebuild(&self, paragraphs: Vec<String>) {
        let (config, annotator) = self.read(|engine| {
            (
                engine.config.clone(),
                Arc::clone(engine.questions.annotator()),
            )
        });
        let total = paragraphs.len();
        let engine = QaEngine::construct(paragraphs, config, annotator);

        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = engine;
        tracing::info!("Rebuilt engine with {} paragraphs", total);
    }
}
