//! Error types for the tabq crate

use thiserror::Error;

/// Main error type for the tabq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("state {state} is out of range for a table with {num_states} states")]
    StateOutOfRange { state: usize, num_states: usize },

    #[error("action {action} is out of range for a table with {num_actions} actions")]
    ActionOutOfRange { action: usize, num_actions: usize },

    #[error("environment adapter failed during {operation}: {message}")]
    Adapter { operation: String, message: String },

    #[error("environment adapter is closed")]
    AdapterClosed,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("action space is empty, nothing to sample")]
    EmptyActionSpace,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
