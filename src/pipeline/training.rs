//! Training pipeline for tabular Q-learning

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Environment, Observer},
    q_learning::{ActionSelector, QTable},
};

/// Training configuration
///
/// An immutable set of scalars fixed before training starts and passed into
/// the pipeline at construction; nothing is read from ambient state. The
/// defaults mirror the original agent's constants.
///
/// The epsilon fields describe an exploration schedule that the action
/// selector deliberately does not consult: the agent explores uniformly at
/// random on every step. They are validated and carried so a greedy variant
/// can reuse the same configuration shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Learning rate α, in (0, 1]
    pub learning_rate: f64,

    /// Discount factor γ, in [0, 1]
    pub discount_factor: f64,

    /// Initial exploration rate
    pub epsilon: f64,

    /// Upper bound of the exploration schedule
    pub max_epsilon: f64,

    /// Lower bound of the exploration schedule
    pub min_epsilon: f64,

    /// Per-episode exploration decay rate
    pub epsilon_decay: f64,

    /// Number of training episodes
    pub episodes: usize,

    /// Safety cap on steps per episode, independent of the environment's
    /// own termination signal
    pub max_steps: usize,

    /// Configured state capacity of the Q-table (upper bound, not derived
    /// from the environment)
    pub num_states: usize,

    /// Configured action capacity of the Q-table
    pub num_actions: usize,

    /// Random seed for the action selector
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.75,
            discount_factor: 0.95,
            epsilon: 1.0,
            max_epsilon: 1.0,
            min_epsilon: 0.01,
            epsilon_decay: 0.01,
            episodes: 30,
            max_steps: 100,
            num_states: 2000,
            num_actions: 2000,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Set the number of training episodes.
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the per-episode step cap.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set the learning rate α.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor γ.
    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Set the Q-table capacity.
    pub fn with_table_size(mut self, num_states: usize, num_actions: usize) -> Self {
        self.num_states = num_states;
        self.num_actions = num_actions;
        self
    }

    /// Set the random seed for deterministic action selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if any scalar is
    /// outside its valid range. Called before training begins; a rejected
    /// configuration never touches the environment.
    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| Err(crate::Error::InvalidConfiguration { message });

        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return fail(format!(
                "learning rate {} must be in (0, 1]",
                self.learning_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return fail(format!(
                "discount factor {} must be in [0, 1]",
                self.discount_factor
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return fail(format!("epsilon {} must be in [0, 1]", self.epsilon));
        }
        if self.min_epsilon > self.max_epsilon {
            return fail(format!(
                "min epsilon {} exceeds max epsilon {}",
                self.min_epsilon, self.max_epsilon
            ));
        }
        if self.max_steps == 0 {
            return fail("max steps per episode must be positive".to_string());
        }
        if self.num_states == 0 || self.num_actions == 0 {
            return fail(format!(
                "table dimensions must be positive, got {}x{}",
                self.num_states, self.num_actions
            ));
        }
        Ok(())
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Episodes completed
    pub episodes: usize,

    /// Cumulative reward per episode, in episode order
    pub episode_rewards: Vec<f64>,

    /// Arithmetic mean of the episode rewards.
    ///
    /// NaN for a zero-episode run; an undefined mean is reported as-is
    /// rather than masked with a zero.
    pub mean_reward: f64,
}

impl TrainingResult {
    /// Create a result from the ordered episode-reward sequence.
    pub fn new(episode_rewards: Vec<f64>) -> Self {
        let episodes = episode_rewards.len();
        let mean_reward = episode_rewards.iter().sum::<f64>() / episodes as f64;
        Self {
            episodes,
            episode_rewards,
            mean_reward,
        }
    }

    /// Save result to JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialized.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline driving episodes against an environment adapter
///
/// The pipeline owns the Q-table for the duration of a run and executes the
/// episode state machine: reset, bounded step loop with one Bellman update
/// per executed step, reward accumulation, and metrics collection. Execution
/// is strictly sequential; every adapter call blocks until it returns.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline.
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training against the given environment.
    ///
    /// The environment is closed exactly once on every exit path, including
    /// aborts caused by adapter or table errors. When both training and
    /// teardown fail, the training error wins.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by configuration validation, the
    /// environment adapter, the Q-table, an observer, or teardown. Adapter
    /// errors are never retried; the simulation session is assumed broken.
    pub fn run(&mut self, env: &mut dyn Environment) -> Result<TrainingResult> {
        self.config.validate()?;

        let outcome = self.run_episodes(env);
        let teardown = env.close();

        let result = outcome?;
        teardown?;
        Ok(result)
    }

    fn run_episodes(&mut self, env: &mut dyn Environment) -> Result<TrainingResult> {
        let mut q_table = QTable::new(
            self.config.num_states,
            self.config.num_actions,
            self.config.learning_rate,
            self.config.discount_factor,
        )?;
        let mut selector = match self.config.seed {
            Some(seed) => ActionSelector::with_seed(seed),
            None => ActionSelector::new(),
        };

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut episode_rewards = Vec::with_capacity(self.config.episodes);

        for episode in 0..self.config.episodes {
            let mut state = env.reset()?;
            let mut total_reward = 0.0;

            for observer in &mut self.observers {
                observer.on_episode_start(episode, state)?;
            }

            for step in 0..self.config.max_steps {
                let action = selector.select(env.action_space());
                let transition = env.step(action)?;

                // Bellman update, applied once per executed step, before the
                // next action is selected.
                q_table.q_learning_update(state, action, transition.reward, transition.next_state)?;

                total_reward += transition.reward;

                for observer in &mut self.observers {
                    observer.on_step(episode, step, state, action, &transition)?;
                }

                state = transition.next_state;
                if transition.done {
                    break;
                }
            }

            episode_rewards.push(total_reward);
            for observer in &mut self.observers {
                observer.on_episode_end(episode, total_reward)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(episode_rewards))
    }
}
