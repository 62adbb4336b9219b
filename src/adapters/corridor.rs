//! Corridor environment: a small deterministic walk for end-to-end runs.
//!
//! States are positions `0..=length` along a corridor; the agent starts at
//! position 0 and the episode ends at position `length`. Two actions: move
//! back (clamped at 0) or forward. Each step costs -1, reaching the end pays
//! +10. With uniform-random action selection the walk still terminates often
//! enough for short corridors to make a usable demo target.

use crate::{
    Result,
    ports::{ActionSpace, Environment, StepInfo, Transition},
    types::{Action, State},
};

const BACK: usize = 0;
const FORWARD: usize = 1;

const STEP_REWARD: f64 = -1.0;
const GOAL_REWARD: f64 = 10.0;

/// Deterministic corridor walk environment.
#[derive(Debug)]
pub struct CorridorEnvironment {
    length: usize,
    position: usize,
    space: ActionSpace,
    closed: bool,
}

impl CorridorEnvironment {
    /// Create a corridor with the goal at position `length`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "corridor length must be positive".to_string(),
            });
        }
        Ok(Self {
            length,
            position: 0,
            space: ActionSpace::new(2)?,
            closed: false,
        })
    }

    /// Number of distinct states (`length + 1` positions).
    pub fn num_states(&self) -> usize {
        self.length + 1
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(crate::Error::AdapterClosed);
        }
        Ok(())
    }
}

impl Environment for CorridorEnvironment {
    fn reset(&mut self) -> Result<State> {
        self.ensure_open()?;
        self.position = 0;
        Ok(State::new(0))
    }

    fn step(&mut self, action: Action) -> Result<Transition> {
        self.ensure_open()?;

        self.position = match action.index() {
            BACK => self.position.saturating_sub(1),
            FORWARD => (self.position + 1).min(self.length),
            other => {
                return Err(crate::Error::Adapter {
                    operation: "step".to_string(),
                    message: format!("unknown action index {other}"),
                });
            }
        };

        let done = self.position == self.length;
        let reward = if done { GOAL_REWARD } else { STEP_REWARD };

        Ok(Transition {
            next_state: State::new(self.position),
            reward,
            done,
            info: StepInfo::default(),
        })
    }

    fn action_space(&self) -> ActionSpace {
        self.space
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
