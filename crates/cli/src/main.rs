use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tutti_core::orchestrator::{Orchestrator, OrchestratorConfig};

mod commands;

/// Tutti - every build task at once
#[derive(Parser)]
#[command(name = "tutti")]
#[command(about = "Runs a package's build tasks concurrently and reports their timings")]
#[command(version)]
struct Cli {
    /// Path to the task-set file (defaults to ./tutti.yml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upper bound on concurrently running tasks
    #[arg(short, long)]
    jobs: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run tasks from the task set
    Run {
        /// Task names to run (the whole set when omitted)
        tasks: Vec<String>,
    },
    /// List the configured tasks without running them
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve the task set up front; command modules only handle presentation
    let orchestrator = Orchestrator::new(OrchestratorConfig {
        config_path: cli.config,
        jobs: cli.jobs,
    })
    .map_err(|e| anyhow::anyhow!("Failed to load task set: {}", e))?;

    match cli.command {
        Some(Commands::Run { tasks }) => commands::run::execute(&orchestrator, &tasks).await,
        Some(Commands::List) => commands::list::execute(&orchestrator),
        // Bare invocation runs the whole set
        None => commands::run::execute(&orchestrator, &[]).await,
    }
}
