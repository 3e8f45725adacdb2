//! Content Meta CLI
//!
//! Command-line interface over the metadata reconciliation engine.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if meta_sync::logging::init(cli.verbose).is_ok() {
        tracing::debug!(verbose = cli.verbose, "Logging initialized");
    }

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    runtime.block_on(execute_command(cli.command))
}

async fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Defaults { schema } => commands::run_defaults(&schema).await,
        Commands::Sync {
            schema,
            stored,
            output,
        } => commands::run_sync(&schema, stored.as_deref(), output.as_deref()).await,
        Commands::Check {
            schema,
            stored,
            json,
        } => commands::run_check(&schema, &stored, json).await,
    }
}
