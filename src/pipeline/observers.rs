//! Observer pattern for training pipelines
//!
//! Observers allow composable data collection during training without
//! coupling the episode loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Observer, Transition},
    types::{Action, State},
};

/// Observation of a single environment step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Episode number
    pub episode: usize,
    /// Step number within the episode
    pub step: usize,
    /// State before the action
    pub state: State,
    /// Action executed
    pub action: Action,
    /// Reward returned by the environment
    pub reward: f64,
    /// State after the action
    pub next_state: State,
    /// Whether the episode terminated with this step
    pub done: bool,
}

/// Complete observation of one training episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Episode number
    pub episode: usize,
    /// Cumulative reward over the episode
    pub total_reward: f64,
    /// Steps executed
    pub total_steps: usize,
    /// Per-step observations
    pub steps: Vec<StepRecord>,
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    last_reward: Option<f64>,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            last_reward: None,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, total_reward: f64) -> Result<()> {
        self.last_reward = Some(total_reward);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(format!("reward {total_reward:.2}"));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            match self.last_reward {
                Some(reward) => pb.finish_with_message(format!("last reward {reward:.2}")),
                None => pb.finish_with_message("no episodes"),
            }
        }
        Ok(())
    }
}

/// Reward log observer - Prints one line per completed episode
///
/// Mirrors the episode report of the original agent: episode number and
/// cumulative reward, as plain text.
pub struct RewardLogObserver;

impl Observer for RewardLogObserver {
    fn on_episode_end(&mut self, episode: usize, total_reward: f64) -> Result<()> {
        println!("episode {episode}: total reward {total_reward}");
        Ok(())
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub mean_reward: f64,
    pub best_reward: f64,
    pub worst_reward: f64,
}

/// Metrics observer - Records the episode-reward sequence
///
/// Keeps one entry per completed episode, in episode order. The sequence is
/// the reporting surface consumed by exporters and external plotting.
pub struct MetricsObserver {
    episode_rewards: Vec<f64>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            episode_rewards: Vec::new(),
        }
    }

    /// Ordered episode-reward sequence recorded so far.
    pub fn episode_rewards(&self) -> &[f64] {
        &self.episode_rewards
    }

    /// Number of completed episodes.
    pub fn episodes(&self) -> usize {
        self.episode_rewards.len()
    }

    /// Mean cumulative reward; NaN when no episodes completed.
    pub fn mean_reward(&self) -> f64 {
        self.episode_rewards.iter().sum::<f64>() / self.episode_rewards.len() as f64
    }

    /// Best episode reward; NaN when no episodes completed.
    pub fn best_reward(&self) -> f64 {
        self.episode_rewards
            .iter()
            .copied()
            .fold(f64::NAN, f64::max)
    }

    /// Worst episode reward; NaN when no episodes completed.
    pub fn worst_reward(&self) -> f64 {
        self.episode_rewards
            .iter()
            .copied()
            .fold(f64::NAN, f64::min)
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            episodes: self.episodes(),
            mean_reward: self.mean_reward(),
            best_reward: self.best_reward(),
            worst_reward: self.worst_reward(),
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, total_reward: f64) -> Result<()> {
        self.episode_rewards.push(total_reward);
        Ok(())
    }
}

/// JSONL observer - Exports episode observations to JSON Lines format
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_episode: usize,
    current_steps: Vec<StepRecord>,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self {
            writer,
            current_episode: 0,
            current_steps: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_episode_start(&mut self, episode: usize, _initial_state: State) -> Result<()> {
        self.current_episode = episode;
        self.current_steps.clear();
        Ok(())
    }

    fn on_step(
        &mut self,
        episode: usize,
        step: usize,
        state: State,
        action: Action,
        transition: &Transition,
    ) -> Result<()> {
        self.current_steps.push(StepRecord {
            episode,
            step,
            state,
            action,
            reward: transition.reward,
            next_state: transition.next_state,
            done: transition.done,
        });
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, total_reward: f64) -> Result<()> {
        let record = EpisodeRecord {
            episode,
            total_reward,
            total_steps: self.current_steps.len(),
            steps: std::mem::take(&mut self.current_steps),
        };

        // One JSON object per line
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}
