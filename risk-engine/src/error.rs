//! Error types for risk engine

use thiserror::Error;

/// Risk engine error
///
/// Never escapes [`crate::RiskAssessor::assess`]; it names the internal
/// failure that triggered the fail-closed fallback.
#[derive(Debug, Error)]
pub enum Error {
    /// Transaction history could not be read
    #[error("history unavailable: {0}")]
    History(#[from] transaction_core::Error),

    /// History statistics could not be computed
    #[error("history statistics failed: {0}")]
    Statistics(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
