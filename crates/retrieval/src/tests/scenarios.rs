//! End-to-end answering scenarios.

use crate::annotate::HeuristicAnnotator;
use crate::config::RetrievalConfig;
use crate::engine::QaEngine;
use crate::extract::NO_ANSWER;
use crate::types::AnswerType;
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(paragraphs: &[&str], config: RetrievalConfig) -> QaEngine {
        QaEngine::construct(
            paragraphs.iter().map(|p| p.to_string()).collect(),
            config,
            Arc::new(HeuristicAnnotator::new()),
        )
    }

    fn engine(paragraphs: &[&str]) -> QaEngine {
        engine_with(paragraphs, RetrievalConfig::default())
    }

    #[test]
    fn test_capital_of_france() {
        let qa = engine(&[
            "Paris is the capital of France.",
            "Berlin is the capital of Germany.",
        ]);
        let question = qa.process_question("Where is the capital of France?");
        assert_eq!(question.answer_type, AnswerType::Location);

        let trace = qa.trace(&question);
        assert_eq!(trace.paragraphs[0].index, 0);

        let answer = qa.query(&question);
        assert!(answer.contains("Paris") || answer.contains("France"));
        assert_eq!(answer, "Paris");
    }

    #[test]
    fn test_empty_corpus_answers_no_answer() {
        let qa = engine(&[]);
        let question = qa.process_question("Where is the capital of France?");
        assert_eq!(qa.query(&question), NO_ANSWER);
    }

    #[test]
    fn test_short_question_matching_sentence_ranks_first() {
        let qa = engine(&["Volcanoes erupt violently. Volcanoes erupt. Rivers flow."]);
        let question = qa.process_question("Volcanoes erupt");
        let trace = qa.trace(&question);
        let top = &trace.sentences[0];

        assert_eq!(top.text, "Volcanoes erupt.");
        // Both query terms hit: 2 hits over 3 tokens × 2 terms
        assert!((top.score - 1.0 / 3.0).abs() < 1e-12);
        assert!(trace.sentences.iter().skip(1).all(|s| s.score < top.score));
    }

    #[test]
    fn test_person_after_abbreviated_title() {
        let qa = engine(&[
            "The novel was written by Dr. Ada Lovelace in London.",
            "Paris is the capital of France.",
        ]);
        let question = qa.process_question("Who wrote the novel?");
        assert_eq!(question.answer_type, AnswerType::Person);

        let trace = qa.trace(&question);
        assert_eq!(
            trace.sentences[0].text,
            "The novel was written by Dr. Ada Lovelace in London."
        );
        assert_eq!(trace.answer, "Ada Lovelace");
    }

    #[test]
    fn test_date_question() {
        let qa = engine(&[
            "Apple released the iPod on October 23, 2001. It stored music.",
            "The Macintosh was introduced in 1984.",
        ]);
        assert_eq!(qa.ask("When did Apple release the iPod?"), "October 23, 2001");
    }

    #[test]
    fn test_definition_question_answers_with_sentence() {
        let qa = engine(&[
            "Python is a programming language. It was created by Guido van Rossum.",
            "Rust is a systems programming language.",
        ]);
        let question = qa.process_question("What is Python?");
        assert_eq!(question.answer_type, AnswerType::Definition);
        assert_eq!(qa.query(&question), "Python is a programming language.");
    }

    #[test]
    fn test_without_stemming_or_stopword_removal() {
        let config = RetrievalConfig {
            remove_stop_words: false,
            use_stemmer: false,
            ..Default::default()
        };
        let qa = engine_with(
            &[
                "Paris is the capital of France.",
                "Berlin is the capital of Germany.",
            ],
            config,
        );

        assert!(qa.index().idf("the").is_some());
        assert!(qa.index().idf("france").is_some());
        assert_eq!(qa.ask("Where is the capital of France?"), "Paris");
    }

    #[test]
    fn test_bigram_sentence_ranking() {
        let config = RetrievalConfig {
            ngram_size: 2,
            ..Default::default()
        };
        let qa = engine_with(
            &["The old bridge crosses the river. The river feeds the old mill."],
            config,
        );
        let question = qa.process_question("What crosses the river?");
        let trace = qa.trace(&question);
        assert_eq!(trace.sentences[0].text, "The old bridge crosses the river.");
    }

    #[test]
    fn test_no_paragraph_matches() {
        let qa = engine(&["Paris is the capital of France."]);
        assert_eq!(qa.ask("Who painted Guernica?"), NO_ANSWER);
    }
}
