//! Error types for the domain core

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain core error
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Proposed transaction amount is negative
    #[error("negative transaction amount: {0}")]
    NegativeAmount(Decimal),

    /// Transaction history lookup failed
    #[error("transaction history lookup failed: {0}")]
    History(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
