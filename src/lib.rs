//! Tabular Q-learning against discrete gym-style environments
//!
//! This crate provides:
//! - A dense, bounds-checked Q-table with the Bellman/Q-learning update
//! - A uniform-random action selector with optional deterministic seeding
//! - A training pipeline driving episodes against any [`ports::Environment`]
//! - Composable observers for progress, metrics, and JSONL observation export
//! - Built-in environments for tests and end-to-end runs

pub mod adapters;
pub mod cli;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod types;

pub use error::{Error, Result};
pub use pipeline::{TrainingConfig, TrainingPipeline, TrainingResult};
pub use ports::{ActionSpace, Environment, Observer, Transition};
pub use q_learning::{ActionSelector, QTable};
pub use types::{Action, State};
