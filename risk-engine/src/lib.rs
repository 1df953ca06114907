//! Risk Engine for Meridian
//!
//! Multi-factor risk assessment for proposed financial transactions.
//!
//! Scoring is additive over a fixed factor sequence (amount tier, user
//! history, transaction type, counterparty) and deterministic for fixed
//! inputs. Assessment never surfaces an error to the caller: any internal
//! failure produces a fail-closed critical assessment instead, so a broken
//! assessor can never silently approve a transaction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod scoring;
pub mod types;

pub use error::{Error, Result};
pub use scoring::{RiskAssessor, RiskConfig};
pub use types::{RiskAssessment, RiskLevel};
