//! Train command - Run Q-learning against the built-in corridor environment

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::{
    adapters::CorridorEnvironment,
    export::RewardsCsvExporter,
    pipeline::{JsonlObserver, ProgressObserver, RewardLogObserver, TrainingConfig,
        TrainingPipeline},
};

const DEFAULT_SUMMARY_FILE: &str = "training_summary.json";

/// Normalize a user-supplied summary path to a `.json` file target.
fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let raw_str = raw.as_os_str().to_string_lossy();

    // A trailing separator (or a bare root) names a directory, not a file.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || raw.file_name().is_none() {
        return raw.join(DEFAULT_SUMMARY_FILE);
    }

    match raw.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => raw.to_path_buf(),
        _ => raw.with_extension("json"),
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a tabular Q-learning agent", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 30)]
    pub episodes: usize,

    /// Safety cap on steps per episode
    #[arg(long, default_value_t = 100)]
    pub max_steps: usize,

    /// Learning rate alpha, in (0, 1]
    #[arg(long, default_value_t = 0.75)]
    pub learning_rate: f64,

    /// Discount factor gamma, in [0, 1]
    #[arg(long, default_value_t = 0.95)]
    pub discount_factor: f64,

    /// Q-table state capacity (upper bound, indices beyond the live
    /// environment stay unused)
    #[arg(long, default_value_t = 2000)]
    pub num_states: usize,

    /// Q-table action capacity
    #[arg(long, default_value_t = 2000)]
    pub num_actions: usize,

    /// Length of the built-in corridor environment
    #[arg(long, default_value_t = 8)]
    pub corridor_length: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional path for writing the episode-reward CSV
    #[arg(long)]
    pub rewards_csv: Option<PathBuf>,

    /// Optional file for JSONL observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Show progress bar; `--progress false` prints per-episode reward lines
    /// instead
    #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub progress: bool,
}

/// Execute the train command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the environment fails,
/// or an output artifact cannot be written.
pub fn execute(args: TrainArgs) -> Result<()> {
    let config = TrainingConfig::default()
        .with_episodes(args.episodes)
        .with_max_steps(args.max_steps)
        .with_learning_rate(args.learning_rate)
        .with_discount_factor(args.discount_factor)
        .with_table_size(args.num_states, args.num_actions);
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };

    let mut env = CorridorEnvironment::new(args.corridor_length)?;

    let mut pipeline = TrainingPipeline::new(config);
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    } else {
        pipeline = pipeline.with_observer(Box::new(RewardLogObserver));
    }
    if let Some(path) = &args.observations {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let result = pipeline.run(&mut env)?;

    println!(
        "Training complete: {} episodes, mean reward {}",
        result.episodes, result.mean_reward
    );

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        result.save(&path)?;
        println!("Summary written to {}", path.display());
    }

    if let Some(path) = &args.rewards_csv {
        RewardsCsvExporter::export(path, &result.episode_rewards)?;
        println!("Rewards written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_appends_json_extension() {
        let path = sanitize_summary_path(Path::new("run_overview"));
        assert_eq!(path, PathBuf::from("run_overview.json"));
    }

    #[test]
    fn test_sanitize_keeps_json_extension() {
        let path = sanitize_summary_path(Path::new("out/summary.json"));
        assert_eq!(path, PathBuf::from("out/summary.json"));
    }

    #[test]
    fn test_sanitize_directory_gets_default_file() {
        let arg = format!("summaries{}", std::path::MAIN_SEPARATOR);
        let path = sanitize_summary_path(Path::new(&arg));
        assert_eq!(path, PathBuf::from("summaries/training_summary.json"));
    }
}
