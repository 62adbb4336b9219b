//! Export functionality for analysis
//!
//! The per-episode reward sequence is the crate's reporting surface;
//! external plotting tools consume it from the CSV written here.

mod rewards_csv;

pub use rewards_csv::RewardsCsvExporter;
