//! Error types for search and game operations.

use thiserror::Error;

/// Errors that can occur while building or querying a search tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MctsError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Playout did not reach a terminal state within {limit} moves")]
    NonTerminatingPlayout { limit: u32 },

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Convenience Result type for search operations.
pub type Result<T> = std::result::Result<T, MctsError>;
