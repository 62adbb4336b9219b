//! Environment port - abstraction over the external simulation
//!
//! The trainer only ever talks to the simulated environment through this
//! port: synchronous request/response calls with no assumption about how the
//! adapter reaches the actual simulator (in-process, socket, pipe, ...).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    types::{Action, State},
};

/// The discrete action space advertised by an environment.
///
/// Actions are indices in `0..n`. The space is a plain value so the selector
/// can sample from it with its own RNG without reaching into the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    n: usize,
}

impl ActionSpace {
    /// Create a discrete action space with `n` actions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyActionSpace`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(crate::Error::EmptyActionSpace);
        }
        Ok(ActionSpace { n })
    }

    /// Number of actions in the space. Always positive.
    pub fn num_actions(&self) -> usize {
        self.n
    }

    /// Check whether an action lies inside the space.
    pub fn contains(&self, action: Action) -> bool {
        action.index() < self.n
    }

    /// Sample a uniformly random action from the space.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Action {
        Action::new(rng.random_range(0..self.n))
    }
}

/// Auxiliary information returned alongside a step.
///
/// The learning core never inspects this; it is carried for observers and
/// diagnostics only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepInfo {
    /// Custom fields supplied by the adapter
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Result of a single environment step
#[derive(Debug, Clone)]
pub struct Transition {
    /// State the environment moved into
    pub next_state: State,
    /// Scalar reward for the executed action
    pub reward: f64,
    /// Whether the episode terminated with this step
    pub done: bool,
    /// Auxiliary adapter info (unused by the core)
    pub info: StepInfo,
}

/// Environment trait - synchronous adapter contract for the trainer
///
/// Implementations wrap the actual simulation, whether it runs in-process or
/// as an external system. All calls block until the environment responds; the
/// trainer performs no retries, so any error here aborts the training run.
///
/// # Lifecycle
///
/// 1. `reset()` at the start of every episode
/// 2. `step(action)` repeatedly until `done` or the trainer's step cap
/// 3. `close()` exactly once when training finishes or aborts
pub trait Environment {
    /// Begin a new episode and return the initial state.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying simulation session is broken.
    fn reset(&mut self) -> Result<State>;

    /// Execute one action and return the resulting transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter fails to produce a transition. The
    /// trainer treats this as fatal: the environment state is unknown and
    /// cannot safely be continued.
    fn step(&mut self, action: Action) -> Result<Transition>;

    /// The action space for the current episode.
    fn action_space(&self) -> ActionSpace;

    /// Release the adapter's underlying resources.
    ///
    /// Called exactly once at the end of training, on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if teardown fails.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
