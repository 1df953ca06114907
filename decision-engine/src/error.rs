//! Error types for the decision engine

use thiserror::Error;

/// Decision engine error
#[derive(Debug, Error)]
pub enum Error {
    /// Transaction history could not be read
    #[error("history unavailable: {0}")]
    History(#[from] transaction_core::Error),

    /// Summary aggregation overflowed
    #[error("summary aggregation overflow: {0}")]
    Aggregation(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
