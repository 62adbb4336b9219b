//! Uniform-random action selection

use rand::{SeedableRng, rngs::StdRng};

use crate::ports::environment::ActionSpace;
use crate::types::Action;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Action selector sampling uniformly from the environment's action space
///
/// Selection is independent of the Q-table contents: every step draws a
/// uniformly random action from the space advertised by the environment.
/// The epsilon schedule carried in the training configuration is not
/// consulted here; it exists for parity with the original agent, which
/// configured an exploration decay but selected purely at random.
#[derive(Debug)]
pub struct ActionSelector {
    rng: StdRng,
}

impl ActionSelector {
    /// Create a selector with a non-deterministic RNG.
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
        }
    }

    /// Create a selector seeded for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: build_rng(Some(seed)),
        }
    }

    /// Select an action for the current state.
    ///
    /// The returned action is always inside `space`.
    pub fn select(&mut self, space: ActionSpace) -> Action {
        space.sample(&mut self.rng)
    }
}

impl Default for ActionSelector {
    fn default() -> Self {
        Self::new()
    }
}
