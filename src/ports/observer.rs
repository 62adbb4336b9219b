//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events, allowing
//! composable data collection without coupling the episode loop to specific
//! output formats or metrics.

use crate::{
    Result,
    ports::environment::Transition,
    types::{Action, State},
};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different types of data during
/// training: progress bars, reward metrics, JSONL export, and so on.
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - For each executed step, after the Q-update
///    - `on_episode_end(episode, total_reward)`
/// 3. `on_training_end()` - Once at the end
pub trait Observer {
    /// Called when training starts.
    ///
    /// # Errors
    ///
    /// Implementations may fail (e.g., output setup); errors abort training.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts, after the environment reset.
    ///
    /// # Errors
    ///
    /// Implementation-defined; errors abort training.
    fn on_episode_start(&mut self, _episode: usize, _initial_state: State) -> Result<()> {
        Ok(())
    }

    /// Called once per executed step, after the Q-table update.
    ///
    /// # Errors
    ///
    /// Implementation-defined; errors abort training.
    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        _state: State,
        _action: Action,
        _transition: &Transition,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends, with its cumulative reward.
    ///
    /// # Errors
    ///
    /// Implementation-defined; errors abort training.
    fn on_episode_end(&mut self, _episode: usize, _total_reward: f64) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to finalize outputs, close files, or display summaries.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
