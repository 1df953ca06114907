//! Decision Engine for Meridian
//!
//! Evaluates proposed financial transactions by combining risk scoring,
//! rolling limit checks, and AML screening into a single decision bundle
//! the caller persists and acts on.
//!
//! # Architecture
//!
//! - **Pure computation**: no I/O beyond the injected history store, no
//!   locks, no shared mutable state; `evaluate` calls are independent and
//!   safe to run concurrently
//! - **Fail closed**: sub-component failures surface as blocking or
//!   review-requiring results, never as silent approvals
//! - **Caller-owned side effects**: persistence, audit logging, and
//!   approve/reject transitions happen outside this crate

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod reporting;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use orchestrator::{Decision, DecisionOutcome, TransactionOrchestrator};
pub use reporting::{BucketStats, TransactionReporter, TransactionSummary};
