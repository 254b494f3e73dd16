//! Chat command handler.
//!
//! Interactive question answering over stdin.

use super::{load_engine, run_blocking};
use clap::Args;
use factoid_core::{config::AppConfig, AppResult};
use factoid_retrieval::{dataset, SharedEngine};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*((hi+)|((good\s)?morning|evening|afternoon)|(he((llo)|y+)))\s*$")
        .expect("greeting pattern is valid")
});

const RELOAD: &str = "/reload";

/// Interactive question answering session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Corpus file or directory (default: configured corpus)
    #[arg(long, env = "FACTOID_CORPUS")]
    pub corpus: Option<PathBuf>,
}

/// What the user typed, as the session sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Empty,
    Greeting,
    Bye,
    Reload,
    Question(String),
}

impl ChatInput {
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if GREETING.is_match(line) {
            Self::Greeting
        } else if trimmed.eq_ignore_ascii_case("bye") {
            Self::Bye
        } else if trimmed == RELOAD {
            Self::Reload
        } else {
            Self::Question(trimmed.to_string())
        }
    }
}

impl ChatCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let corpus = config.resolve_corpus(self.corpus.as_deref())?;
        let engine = SharedEngine::new(load_engine(config, Some(&corpus)).await?);

        bot("Hey! I am ready. Ask me factoid based questions only.");
        bot("You can say Bye anytime you want.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("You> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match ChatInput::classify(&line) {
                ChatInput::Empty => bot("You need to ask something."),
                ChatInput::Greeting => bot("Hello!"),
                ChatInput::Bye => {
                    bot("Bye Bye!");
                    break;
                }
                ChatInput::Reload => {
                    let corpus = corpus.clone();
                    let shared = engine.clone();
                    let total = run_blocking(move || -> AppResult<usize> {
                        let paragraphs = dataset::load_paragraphs(&corpus)?;
                        let total = paragraphs.len();
                        shared.rebuild(paragraphs);
                        Ok(total)
                    })
                    .await?;
                    match total {
                        Ok(total) => bot(&format!("Reloaded {} paragraphs.", total)),
                        Err(e) => {
                            tracing::warn!("Reload failed: {}", e);
                            bot(&format!("Reload failed: {}", e));
                        }
                    }
                }
                ChatInput::Question(question) => {
                    let shared = engine.clone();
                    let answer = run_blocking(move || shared.ask(&question)).await?;
                    bot(&answer);
                }
            }
        }

        Ok(())
    }
}

fn bot(message: &str) {
    println!("Bot> {}", message);
}
