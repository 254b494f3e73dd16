//! Command handlers for the factoid CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod chat;
pub mod eval;
pub mod stats;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use eval::EvalCommand;
pub use stats::StatsCommand;

use factoid_core::{config::AppConfig, AppError, AppResult};
use factoid_retrieval::{config::load_config, QaEngine};
use std::path::Path;

/// Resolve the corpus and build an engine over it on the blocking pool.
pub async fn load_engine(config: &AppConfig, corpus: Option<&Path>) -> AppResult<QaEngine> {
    let corpus = config.resolve_corpus(corpus)?;
    let retrieval = load_config(&config.workspace)?;
    tracing::info!("Loading corpus from {:?}", corpus);

    run_blocking(move || factoid_retrieval::open_engine(&corpus, retrieval)).await?
}

/// Run CPU-bound work off the async runtime.
pub async fn run_blocking<T, F>(work: F) -> AppResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Other(format!("Background task failed: {}", e)))
}
