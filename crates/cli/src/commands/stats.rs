//! Stats command handler.
//!
//! Shows corpus index statistics.

use super::load_engine;
use clap::Args;
use factoid_core::{config::AppConfig, AppResult};
use std::path::PathBuf;

/// Show corpus index statistics
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Corpus file or directory (default: configured corpus)
    #[arg(long, env = "FACTOID_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Number of most significant terms to list
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing stats command");
        tracing::debug!("Stats options: {:?}", self);

        let engine = load_engine(config, self.corpus.as_deref()).await?;
        let index = engine.index();
        let terms = index.most_significant_terms(self.top);

        if self.json {
            let output = serde_json::json!({
                "paragraphs": index.total_paragraphs(),
                "uniqueTerms": index.unique_terms(),
                "config": engine.config(),
                "topTerms": terms
                    .iter()
                    .map(|(term, weight)| serde_json::json!({ "term": term, "weight": weight }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("Paragraphs:   {}", index.total_paragraphs());
        println!("Unique terms: {}", index.unique_terms());
        println!(
            "Normalization: stemming {}, stopword removal {}",
            on_off(engine.config().use_stemmer),
            on_off(engine.config().remove_stop_words)
        );

        if !terms.is_empty() {
            println!();
            println!("Most significant terms:");
            for (term, weight) in &terms {
                println!("  {:<20} {:.4}", term, weight);
            }
        }

        Ok(())
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
