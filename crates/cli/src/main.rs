//! Factoid CLI
//!
//! Main entry point for the factoid command-line tool.
//! Answers factoid questions from a local paragraph corpus.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, EvalCommand, StatsCommand};
use factoid_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Factoid - question answering over a local paragraph corpus
#[derive(Parser, Debug)]
#[command(name = "factoid")]
#[command(about = "Factoid question answering over a local paragraph corpus", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "FACTOID_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "FACTOID_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a single question
    Ask(AskCommand),

    /// Interactive question answering session
    Chat(ChatCommand),

    /// Measure accuracy against a SQuAD-style dataset
    Eval(EvalCommand),

    /// Show corpus index statistics
    Stats(StatsCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load configuration from environment and the config file the CLI points at
    let config = AppConfig::load_from(cli.workspace, cli.config)?;

    // Apply remaining CLI overrides
    let config = config.with_overrides(cli.log_level, cli.verbose, cli.no_color);

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Factoid CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Corpus: {:?}", config.corpus);

    // Emit command.start span
    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Eval(_) => "eval",
        Commands::Stats(_) => "stats",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Eval(cmd) => cmd.execute(&config).await,
        Commands::Stats(cmd) => cmd.execute(&config).await,
    };

    // Log completion
    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
