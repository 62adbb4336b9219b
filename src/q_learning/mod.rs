//! Tabular Q-learning core
//!
//! This module implements the value store and action selection for tabular
//! temporal difference learning driven by sampled transitions.
//!
//! ## Pieces
//!
//! - **`QTable`**: dense (state, action) value store with the off-policy
//!   Bellman update `Q(s,a) += alpha * (r + gamma * max_a' Q(s',a') - Q(s,a))`
//! - **`ActionSelector`**: samples actions uniformly from the environment's
//!   action space, independent of current Q-values
//!
//! ## Usage Example
//!
//! ```
//! use tabq::q_learning::QTable;
//! use tabq::types::{Action, State};
//!
//! let mut table = QTable::new(10, 4, 0.75, 0.95)?;
//! table.q_learning_update(State::new(0), Action::new(1), 10.0, State::new(2))?;
//! assert_eq!(table.get(State::new(0), Action::new(1))?, 7.5);
//! # Ok::<(), tabq::Error>(())
//! ```

pub mod q_table;
pub mod selector;

pub use q_table::QTable;
pub use selector::ActionSelector;
