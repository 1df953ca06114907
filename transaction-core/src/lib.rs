//! Shared domain types for the Meridian evaluation core
//!
//! Value objects exchanged between the risk, compliance, and decision
//! crates, plus the transaction-history collaborator trait they read
//! through. Everything here is an immutable value type:
//!
//! - **Exact arithmetic**: `Decimal` for all monetary amounts
//! - **UTC everywhere**: all windows and timestamps are `DateTime<Utc>`
//! - **No I/O**: history access goes through [`TransactionStore`],
//!   implemented by the enclosing system

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;
pub mod window;

pub use error::{Error, Result};
pub use store::{MemoryStore, TransactionStore};
pub use types::{
    CounterpartyInfo, ProposedTransaction, TransactionRecord, TransactionStatus, TransactionType,
    UserId,
};
pub use window::TimeWindow;
