//! Error types for financial calculations

use thiserror::Error;

/// Financial calculation error
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Invalid numeric input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Decimal arithmetic overflow
    #[error("decimal overflow computing {0}")]
    Overflow(&'static str),

    /// Newton-Raphson iteration failed to converge
    #[error("IRR did not converge: {0}")]
    Convergence(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
