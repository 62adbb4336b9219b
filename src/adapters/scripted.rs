//! Scripted environment for testing.
//!
//! This adapter replays a pre-built script of transitions, enabling fast,
//! deterministic pipeline tests without any real simulation. It also counts
//! adapter calls so tests can assert on the trainer's resource handling.

use std::collections::VecDeque;

use crate::{
    Result,
    ports::{ActionSpace, Environment, StepInfo, Transition},
    types::{Action, State},
};

/// One scripted reply to a `step` call.
#[derive(Debug, Clone)]
pub enum ScriptedStep {
    /// Return this transition
    Transition {
        next_state: State,
        reward: f64,
        done: bool,
    },
    /// Fail the step with an adapter communication error
    Fail(String),
}

#[derive(Debug, Clone)]
struct ScriptedEpisode {
    initial_state: State,
    steps: VecDeque<ScriptedStep>,
}

/// Scripted environment replaying canned episodes.
///
/// Episodes are consumed in the order they were added; each `reset` starts
/// the next one. Running past the script is an adapter error, which keeps a
/// misconfigured test loud instead of silently looping.
#[derive(Debug)]
pub struct ScriptedEnvironment {
    action_space: ActionSpace,
    pending: VecDeque<ScriptedEpisode>,
    current: Option<ScriptedEpisode>,
    actions_seen: Vec<Action>,
    reset_count: usize,
    step_count: usize,
    close_count: usize,
}

impl ScriptedEnvironment {
    /// Create a scripted environment advertising `num_actions` actions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyActionSpace`] if `num_actions` is zero.
    pub fn new(num_actions: usize) -> Result<Self> {
        Ok(Self {
            action_space: ActionSpace::new(num_actions)?,
            pending: VecDeque::new(),
            current: None,
            actions_seen: Vec::new(),
            reset_count: 0,
            step_count: 0,
            close_count: 0,
        })
    }

    /// Append an episode: an initial state plus the scripted step replies.
    pub fn with_episode(mut self, initial_state: State, steps: Vec<ScriptedStep>) -> Self {
        self.pending.push_back(ScriptedEpisode {
            initial_state,
            steps: steps.into(),
        });
        self
    }

    /// Actions the trainer submitted, in order.
    pub fn actions_seen(&self) -> &[Action] {
        &self.actions_seen
    }

    /// Number of `reset` calls so far.
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }

    /// Number of `step` calls so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Number of `close` calls so far.
    pub fn close_count(&self) -> usize {
        self.close_count
    }
}

impl Environment for ScriptedEnvironment {
    fn reset(&mut self) -> Result<State> {
        self.reset_count += 1;
        let episode = self.pending.pop_front().ok_or_else(|| crate::Error::Adapter {
            operation: "reset".to_string(),
            message: "script has no more episodes".to_string(),
        })?;
        let initial_state = episode.initial_state;
        self.current = Some(episode);
        Ok(initial_state)
    }

    fn step(&mut self, action: Action) -> Result<Transition> {
        self.step_count += 1;
        self.actions_seen.push(action);

        let episode = self.current.as_mut().ok_or_else(|| crate::Error::Adapter {
            operation: "step".to_string(),
            message: "step called before reset".to_string(),
        })?;

        match episode.steps.pop_front() {
            Some(ScriptedStep::Transition {
                next_state,
                reward,
                done,
            }) => Ok(Transition {
                next_state,
                reward,
                done,
                info: StepInfo::default(),
            }),
            Some(ScriptedStep::Fail(message)) => Err(crate::Error::Adapter {
                operation: "step".to_string(),
                message,
            }),
            None => Err(crate::Error::Adapter {
                operation: "step".to_string(),
                message: "script exhausted for the current episode".to_string(),
            }),
        }
    }

    fn action_space(&self) -> ActionSpace {
        self.action_space
    }

    fn close(&mut self) -> Result<()> {
        self.close_count += 1;
        Ok(())
    }
}
