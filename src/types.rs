//! Newtype wrappers for state and action indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A discretized environment state, identified by its index.
///
/// States are produced by the environment adapter, never constructed by the
/// learning core. The index must stay within the configured Q-table bounds;
/// table operations reject anything outside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State(usize);

impl State {
    /// Create a state from its index.
    pub fn new(index: usize) -> Self {
        State(index)
    }

    /// Get the inner index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for State {
    fn from(index: usize) -> Self {
        State(index)
    }
}

impl From<State> for usize {
    fn from(state: State) -> Self {
        state.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable environment action, identified by its index.
///
/// Actions are produced by the action selector (via the environment's action
/// space) and consumed by the environment adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(usize);

impl Action {
    /// Create an action from its index.
    pub fn new(index: usize) -> Self {
        Action(index)
    }

    /// Get the inner index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for Action {
    fn from(index: usize) -> Self {
        Action(index)
    }
}

impl From<Action> for usize {
    fn from(action: Action) -> Self {
        action.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip() {
        let state = State::new(42);
        assert_eq!(state.index(), 42);
        assert_eq!(usize::from(state), 42);
        assert_eq!(State::from(42), state);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::new(7).to_string(), "7");
    }
}
