//! Accuracy evaluation against SQuAD-style topics.

use crate::annotate::Annotator;
use crate::config::RetrievalConfig;
use crate::dataset::Topic;
use crate::engine::QaEngine;
use crate::types::AnswerType;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Answer-type bucket used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bucket {
    Person,
    Date,
    Location,
    Other,
}

impl From<AnswerType> for Bucket {
    fn from(answer_type: AnswerType) -> Self {
        match answer_type {
            AnswerType::Person => Self::Person,
            AnswerType::Date => Self::Date,
            AnswerType::Location => Self::Location,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub questions: usize,
    pub correct: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResult {
    pub question: String,
    pub answer_type: AnswerType,
    pub response: String,
    pub gold: Vec<String>,
    pub matched: bool,
}

/// Accuracy of one topic.
#[derive(Debug, Clone, Serialize)]
pub struct TopicReport {
    pub topic: String,
    pub questions: usize,
    pub correct: usize,
    /// Percent, rounded to two decimals; -1 when the topic has no questions
    pub accuracy: f64,
    pub buckets: BTreeMap<Bucket, BucketCount>,
    pub results: Vec<QuestionResult>,
}

/// Evaluate every question of `topic` against an engine built from its paragraphs.
pub fn evaluate_topic(
    topic: &Topic,
    config: &RetrievalConfig,
    annotator: Arc<dyn Annotator>,
) -> TopicReport {
    let engine = QaEngine::construct(topic.paragraphs(), config.clone(), Arc::clone(&annotator));

    let mut buckets: BTreeMap<Bucket, BucketCount> = BTreeMap::new();
    let results: Vec<QuestionResult> = topic
        .questions()
        .map(|qa| {
            let processed = engine.process_question(&qa.question);
            let response = engine.query(&processed);
            let gold: Vec<String> = qa.answers.iter().map(|a| a.text.to_lowercase()).collect();
            let matched = response_matches(annotator.as_ref(), &response, &gold);

            let count = buckets.entry(Bucket::from(processed.answer_type)).or_default();
            count.questions += 1;
            count.correct += usize::from(matched);

            QuestionResult {
                question: qa.question.clone(),
                answer_type: processed.answer_type,
                response,
                gold,
                matched,
            }
        })
        .collect();

    let correct = results.iter().filter(|r| r.matched).count();
    let report = TopicReport {
        topic: topic.title.clone(),
        questions: results.len(),
        correct,
        accuracy: accuracy(correct, results.len()),
        buckets,
        results,
    };

    tracing::info!(
        "Evaluated {:?}: {}/{} correct ({}%)",
        report.topic,
        report.correct,
        report.questions,
        report.accuracy
    );
    report
}

/// True when any lowercased response token occurs among the tokens of any
/// gold answer.
pub fn response_matches(annotator: &dyn Annotator, response: &str, gold: &[String]) -> bool {
    let gold_tokens: Vec<HashSet<String>> = gold
        .iter()
        .map(|answer| annotator.tokenize(&answer.to_lowercase()).into_iter().collect())
        .collect();

    annotator
        .tokenize(&response.to_lowercase())
        .iter()
        .any(|token| gold_tokens.iter().any(|tokens| tokens.contains(token)))
}

/// Percent correct rounded to two decimals, or -1 with no questions.
pub fn accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return -1.0;
    }
    (correct as f64 / total as f64 * 10_000.0).round() / 100.0
}

/// Aggregate over evaluated topics.
#[derive(Debug, Clone, Serialize)]
pub struct EvalSummary {
    pub generated_at: DateTime<Utc>,
    pub topics: Vec<TopicReport>,
    /// Topics present in the dataset, including those without questions
    pub total_topics: usize,
    /// Mean topic accuracy over topics with questions
    pub mean_accuracy: f64,
}

impl EvalSummary {
    /// Summarize `reports`, dropping topics with zero questions.
    pub fn new(reports: Vec<TopicReport>) -> Self {
        let total_topics = reports.len();
        let topics: Vec<TopicReport> = reports.into_iter().filter(|r| r.questions > 0).collect();

        let mean_accuracy = if topics.is_empty() {
            -1.0
        } else {
            let sum: f64 = topics.iter().map(|r| r.accuracy).sum();
            (sum / topics.len() as f64 * 100.0).round() / 100.0
        };

        Self {
            generated_at: Utc::now(),
            topics,
            total_topics,
            mean_accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::HeuristicAnnotator;
    use crate::dataset::{GoldAnswer, QuestionAnswers, SquadParagraph};

    fn annotator() -> Arc<dyn Annotator> {
        Arc::new(HeuristicAnnotator::new())
    }

    fn topic(title: &str, context: &str, qas: &[(&str, &str)]) -> Topic {
        Topic {
            title: title.to_string(),
            paragraphs: vec![SquadParagraph {
                context: context.to_string(),
                qas: qas
                    .iter()
                    .map(|(q, a)| QuestionAnswers {
                        question: q.to_string(),
                        answers: vec![GoldAnswer {
                            text: a.to_string(),
                        }],
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_response_matching() {
        let a = HeuristicAnnotator::new();
        let gold = vec!["the eiffel tower".to_string(), "paris".to_string()];

        assert!(response_matches(&a, "Paris", &gold));
        assert!(response_matches(&a, "The Tower.", &gold));
        assert!(!response_matches(&a, "Berlin", &gold));
        assert!(!response_matches(&a, "Paris", &[]));
    }

    #[test]
    fn test_accuracy_rounding() {
        assert_eq!(accuracy(1, 3), 33.33);
        assert_eq!(accuracy(2, 3), 66.67);
        assert_eq!(accuracy(0, 0), -1.0);
    }

    #[test]
    fn test_evaluate_topic() {
        let topic = topic(
            "France",
            "Paris is the capital of France.",
            &[
                ("Where is the capital of France?", "Paris"),
                ("Who wrote Hamlet?", "Shakespeare"),
            ],
        );

        let report = evaluate_topic(&topic, &RetrievalConfig::default(), annotator());

        assert_eq!(report.questions, 2);
        assert_eq!(report.correct, 1);
        assert_eq!(report.accuracy, 50.0);
        assert_eq!(
            report.buckets[&Bucket::Location],
            BucketCount {
                questions: 1,
                correct: 1
            }
        );
        assert_eq!(
            report.buckets[&Bucket::Person],
            BucketCount {
                questions: 1,
                correct: 0
            }
        );
        assert_eq!(report.results[0].response, "Paris");
    }

    #[test]
    fn test_summary_skips_topics_without_questions() {
        let answered = evaluate_topic(
            &topic("France", "Paris is the capital of France.", &[(
                "Where is the capital of France?",
                "Paris",
            )]),
            &RetrievalConfig::default(),
            annotator(),
        );
        let empty = evaluate_topic(
            &topic("Empty", "Nothing here.", &[]),
            &RetrievalConfig::default(),
            annotator(),
        );
        assert_eq!(empty.accuracy, -1.0);

        let summary = EvalSummary::new(vec![answered, empty]);
        assert_eq!(summary.total_topics, 2);
        assert_eq!(summary.topics.len(), 1);
        assert_eq!(summary.mean_accuracy, 100.0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["topics"][0]["buckets"]["LOCATION"]["correct"], 1);
    }
}
