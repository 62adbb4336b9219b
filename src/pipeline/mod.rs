//! Training pipeline abstractions
//!
//! This module provides the episode loop that drives a Q-learning run
//! against an environment adapter, plus composable observers for recording
//! what happens during training.

pub mod observers;
pub mod training;

// Re-export observer implementations (adapters)
pub use observers::{
    EpisodeRecord, JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver,
    RewardLogObserver, StepRecord,
};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Environment, Observer};
