//! CLI infrastructure for the tabq trainer
//!
//! This module provides the command-line interface for running training
//! against the built-in environments and writing result artifacts.

pub mod commands;
