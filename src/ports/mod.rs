//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the learning core and
//! infrastructure. Following hexagonal architecture, these traits are owned
//! by the core and implemented by adapters.

pub mod environment;
pub mod observer;

pub use environment::{ActionSpace, Environment, StepInfo, Transition};
pub use observer::Observer;
