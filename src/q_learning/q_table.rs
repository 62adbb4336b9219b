//! Q-table implementation for temporal difference learning

use serde::{Deserialize, Serialize};

use crate::types::{Action, State};

/// Q-table mapping (state, action) pairs to Q-values
///
/// The table is a dense, zero-initialized matrix sized to a configured upper
/// bound on the state and action spaces. The bound is a configuration
/// constant, not discovered from the environment; live indices are expected
/// to use only a fraction of the capacity. Every access is bounds-checked:
/// an index past the configured dimensions is a fatal misconfiguration (the
/// table was sized too small for the environment), never truncated or
/// wrapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    /// Q-values in row-major (state, action) order
    values: Vec<f64>,
    /// Configured state capacity
    num_states: usize,
    /// Configured action capacity
    num_actions: usize,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a zero-initialized Q-table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if either dimension is
    /// zero, the learning rate is outside (0, 1], or the discount factor is
    /// outside [0, 1].
    pub fn new(
        num_states: usize,
        num_actions: usize,
        learning_rate: f64,
        discount_factor: f64,
    ) -> Result<Self, crate::Error> {
        if num_states == 0 || num_actions == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "table dimensions must be positive, got {num_states}x{num_actions}"
                ),
            });
        }
        if !(learning_rate > 0.0 && learning_rate <= 1.0) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("learning rate {learning_rate} must be in (0, 1]"),
            });
        }
        if !(0.0..=1.0).contains(&discount_factor) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("discount factor {discount_factor} must be in [0, 1]"),
            });
        }
        Ok(Self {
            values: vec![0.0; num_states * num_actions],
            num_states,
            num_actions,
            learning_rate,
            discount_factor,
        })
    }

    /// Configured state capacity.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Configured action capacity.
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    fn index(&self, state: State, action: Action) -> Result<usize, crate::Error> {
        let s = state.index();
        let a = action.index();
        if s >= self.num_states {
            return Err(crate::Error::StateOutOfRange {
                state: s,
                num_states: self.num_states,
            });
        }
        if a >= self.num_actions {
            return Err(crate::Error::ActionOutOfRange {
                action: a,
                num_actions: self.num_actions,
            });
        }
        Ok(s * self.num_actions + a)
    }

    /// Get the Q-value for a state-action pair.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if either index exceeds the table's
    /// configured dimensions.
    pub fn get(&self, state: State, action: Action) -> Result<f64, crate::Error> {
        Ok(self.values[self.index(state, action)?])
    }

    /// Set the Q-value for a state-action pair.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if either index exceeds the table's
    /// configured dimensions.
    pub fn set(&mut self, state: State, action: Action, value: f64) -> Result<(), crate::Error> {
        let idx = self.index(state, action)?;
        self.values[idx] = value;
        Ok(())
    }

    /// Maximum Q-value over all actions in a state.
    ///
    /// Used as the bootstrap target of the Q-learning update.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StateOutOfRange`] if the state index exceeds
    /// the table's configured dimension.
    pub fn max_over_actions(&self, state: State) -> Result<f64, crate::Error> {
        let s = state.index();
        if s >= self.num_states {
            return Err(crate::Error::StateOutOfRange {
                state: s,
                num_states: self.num_states,
            });
        }
        let row = &self.values[s * self.num_actions..(s + 1) * self.num_actions];
        Ok(row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// The bootstrap term always reads the successor row, including on
    /// terminal transitions; the episode loop is responsible for stopping
    /// after a terminal step.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if any involved index exceeds the
    /// table's configured dimensions. The table cell is left untouched.
    pub fn q_learning_update(
        &mut self,
        state: State,
        action: Action,
        reward: f64,
        next_state: State,
    ) -> Result<(), crate::Error> {
        let current_q = self.get(state, action)?;
        let max_next_q = self.max_over_actions(next_state)?;
        let td_target = reward + self.discount_factor * max_next_q;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> QTable {
        QTable::new(10, 4, 0.5, 0.99).unwrap()
    }

    #[test]
    fn test_qtable_initialization() {
        let qtable = table();
        for s in 0..10 {
            for a in 0..4 {
                assert_eq!(qtable.get(State::new(s), Action::new(a)).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_qtable_set_get() {
        let mut qtable = table();
        qtable.set(State::new(3), Action::new(2), 1.5).unwrap();
        assert_eq!(qtable.get(State::new(3), Action::new(2)).unwrap(), 1.5);
        // Neighboring cells stay untouched
        assert_eq!(qtable.get(State::new(3), Action::new(1)).unwrap(), 0.0);
        assert_eq!(qtable.get(State::new(2), Action::new(2)).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(QTable::new(0, 4, 0.5, 0.99).is_err());
        assert!(QTable::new(10, 0, 0.5, 0.99).is_err());
    }

    #[test]
    fn test_invalid_rates_rejected() {
        assert!(QTable::new(10, 4, 0.0, 0.99).is_err());
        assert!(QTable::new(10, 4, 1.1, 0.99).is_err());
        assert!(QTable::new(10, 4, 0.5, -0.1).is_err());
        assert!(QTable::new(10, 4, 0.5, 1.1).is_err());
        assert!(QTable::new(10, 4, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_bounds_checking() {
        let mut qtable = table();

        assert!(matches!(
            qtable.get(State::new(10), Action::new(0)),
            Err(crate::Error::StateOutOfRange {
                state: 10,
                num_states: 10
            })
        ));
        assert!(matches!(
            qtable.get(State::new(0), Action::new(4)),
            Err(crate::Error::ActionOutOfRange {
                action: 4,
                num_actions: 4
            })
        ));
        assert!(matches!(
            qtable.set(State::new(99), Action::new(0), 1.0),
            Err(crate::Error::StateOutOfRange { state: 99, .. })
        ));
        assert!(matches!(
            qtable.max_over_actions(State::new(10)),
            Err(crate::Error::StateOutOfRange { state: 10, .. })
        ));

        // Largest in-bounds indices are fine
        assert!(qtable.get(State::new(9), Action::new(3)).is_ok());
        assert!(qtable.max_over_actions(State::new(9)).is_ok());
    }

    #[test]
    fn test_max_over_actions() {
        let mut qtable = table();
        let state = State::new(5);
        qtable.set(state, Action::new(0), 0.5).unwrap();
        qtable.set(state, Action::new(1), 1.5).unwrap();
        qtable.set(state, Action::new(2), 0.8).unwrap();
        qtable.set(state, Action::new(3), -2.0).unwrap();

        assert_eq!(qtable.max_over_actions(state).unwrap(), 1.5);
        // Other rows are still all-zero
        assert_eq!(qtable.max_over_actions(State::new(6)).unwrap(), 0.0);
    }

    #[test]
    fn test_q_learning_update_exact() {
        let mut qtable = table();
        let state = State::new(0);
        let next_state = State::new(1);

        qtable.set(next_state, Action::new(1), 1.0).unwrap();
        qtable.set(next_state, Action::new(2), 2.0).unwrap();

        qtable
            .q_learning_update(state, Action::new(3), 0.0, next_state)
            .unwrap();

        // Q(s,3) = 0.0 + 0.5 * (0.0 + 0.99 * 2.0 - 0.0) = 0.99
        let updated_q = qtable.get(state, Action::new(3)).unwrap();
        assert_eq!(updated_q, 0.5 * (0.99 * 2.0));
    }

    #[test]
    fn test_update_from_pre_zeroed_table() {
        // alpha=0.75, gamma=0.95, r=10, max Q(s')=0 => Q(0,1) = 7.5
        let mut qtable = QTable::new(3, 2, 0.75, 0.95).unwrap();
        qtable
            .q_learning_update(State::new(0), Action::new(1), 10.0, State::new(2))
            .unwrap();
        assert_eq!(qtable.get(State::new(0), Action::new(1)).unwrap(), 7.5);
    }

    #[test]
    fn test_update_blends_existing_estimate() {
        let mut qtable = QTable::new(4, 2, 0.75, 0.95).unwrap();
        let s = State::new(0);
        let a = Action::new(0);
        let s_next = State::new(1);
        qtable.set(s, a, 4.0).unwrap();
        qtable.set(s_next, Action::new(1), 2.0).unwrap();

        qtable.q_learning_update(s, a, 1.0, s_next).unwrap();

        let expected = 4.0 + 0.75 * (1.0 + 0.95 * 2.0 - 4.0);
        assert_eq!(qtable.get(s, a).unwrap(), expected);
    }

    #[test]
    fn test_failed_update_leaves_cell_untouched() {
        let mut qtable = table();
        let s = State::new(0);
        let a = Action::new(0);
        qtable.set(s, a, 3.0).unwrap();

        let result = qtable.q_learning_update(s, a, 1.0, State::new(999));
        assert!(result.is_err());
        assert_eq!(qtable.get(s, a).unwrap(), 3.0);
    }
}
