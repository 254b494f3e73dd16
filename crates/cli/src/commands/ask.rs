//! Ask command handler.
//!
//! Answers a single question from the corpus.

use super::load_engine;
use clap::Args;
use factoid_core::{config::AppConfig, AppResult};
use std::path::PathBuf;

/// Answer a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Corpus file or directory (default: configured corpus)
    #[arg(long, env = "FACTOID_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Show the ranked paragraphs and sentences behind the answer
    #[arg(long)]
    pub explain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let engine = load_engine(config, self.corpus.as_deref()).await?;
        let processed = engine.process_question(&self.question);
        let trace = engine.trace(&processed);

        if self.json {
            let output = serde_json::json!({
                "question": self.question,
                "answerType": processed.answer_type,
                "questionType": processed.question_type,
                "answer": trace.answer,
                "paragraphs": trace.paragraphs,
                "sentences": trace.sentences,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("{}", trace.answer);

        if self.explain {
            println!();
            println!("Answer type: {}", processed.answer_type);
            println!("Top paragraphs:");
            for ranked in &trace.paragraphs {
                println!("  [{}] {:.4}", ranked.index, ranked.score);
            }
            println!("Ranked sentences:");
            for sentence in trace.sentences.iter().take(5) {
                println!("  {:.4}  {}", sentence.score, sentence.text);
            }
        }

        Ok(())
    }
}
