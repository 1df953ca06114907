use thiserror::Error;

/// Compliance monitoring error. Never escapes the public check methods;
/// it names the internal failure that triggered the fail-closed result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("history unavailable: {0}")]
    History(#[from] transaction_core::Error),

    #[error("usage aggregation overflow: {0}")]
    Aggregation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
