//! tabq CLI - Tabular Q-learning trainer
//!
//! Runs the Q-learning pipeline against the built-in corridor environment
//! and writes training artifacts (summary JSON, rewards CSV, JSONL
//! observations) for external analysis.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tabq")]
#[command(version, about = "Tabular Q-learning trainer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Q-learning agent
    Train(tabq::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => tabq::cli::commands::train::execute(args),
    }
}
