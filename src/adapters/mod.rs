//! Adapters implementing the environment port.
//!
//! The real simulated environment lives in an external process behind some
//! transport; these adapters provide in-process implementations of the same
//! contract, for tests and self-contained runs.

pub mod corridor;
pub mod scripted;

pub use corridor::CorridorEnvironment;
pub use scripted::{ScriptedEnvironment, ScriptedStep};
