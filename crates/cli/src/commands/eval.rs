//! Eval command handler.
//!
//! Measures answer accuracy against a SQuAD-style dataset, one engine per topic.

use clap::Args;
use factoid_core::{config::AppConfig, AppError, AppResult};
use factoid_retrieval::config::load_config;
use factoid_retrieval::dataset::SquadDataset;
use factoid_retrieval::eval::{evaluate_topic, EvalSummary};
use factoid_retrieval::default_annotator;
use futures::future::join_all;
use std::path::PathBuf;

/// Measure accuracy against a SQuAD-style dataset
#[derive(Args, Debug)]
pub struct EvalCommand {
    /// Dataset JSON file
    #[arg(long)]
    pub dataset: PathBuf,

    /// Evaluate only this topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl EvalCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing eval command");
        tracing::debug!("Eval options: {:?}", self);

        let dataset = SquadDataset::load(&self.dataset)?;
        let retrieval = load_config(&config.workspace)?;
        let annotator = default_annotator(&retrieval)?;

        let topics: Vec<_> = match &self.topic {
            Some(title) => vec![dataset.topic(title).cloned().ok_or_else(|| {
                AppError::Corpus(format!("Topic {:?} not found in {:?}", title, self.dataset))
            })?],
            None => dataset.data.clone(),
        };

        tracing::info!("Evaluating {} topics", topics.len());

        let tasks = topics.into_iter().map(|topic| {
            let retrieval = retrieval.clone();
            let annotator = annotator.clone();
            tokio::task::spawn_blocking(move || evaluate_topic(&topic, &retrieval, annotator))
        });

        let mut reports = Vec::new();
        for result in join_all(tasks).await {
            let report = result
                .map_err(|e| AppError::Other(format!("Evaluation task failed: {}", e)))?;
            reports.push(report);
        }

        let summary = EvalSummary::new(reports);

        if let Some(ref path) = self.output {
            std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
            tracing::info!("Wrote evaluation report to {:?}", path);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        let evaluated = summary.topics.len();
        for (position, report) in summary.topics.iter().enumerate() {
            println!(
                "{}/{} {}: {}/{} correct ({:.2}%)",
                position + 1,
                evaluated,
                report.topic,
                report.correct,
                report.questions,
                report.accuracy
            );
        }

        println!();
        println!(
            "Evaluated {} of {} topics, mean accuracy {:.2}%",
            evaluated, summary.total_topics, summary.mean_accuracy
        );
        if let Some(ref path) = self.output {
            println!("Report written to {}", path.display());
        }

        Ok(())
    }
}
