//! Core transaction types
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - Deterministic evaluation (plain value objects, no hidden state)
//! - Serde round-trips (persisted by the enclosing system)

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of the party initiating a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TransactionType {
    /// Funds in
    Deposit,
    /// Funds out
    Withdrawal,
    /// Account-to-account movement
    Transfer,
    /// Payment to a counterparty
    Payment,
    /// Reversal of a prior payment
    Refund,
    /// Platform fee
    Fee,
    /// Interest credit
    Interest,
    /// Dividend credit
    Dividend,
    /// Manual balance adjustment
    Adjustment,
}

impl TransactionType {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
            TransactionType::Payment => "payment",
            TransactionType::Refund => "refund",
            TransactionType::Fee => "fee",
            TransactionType::Interest => "interest",
            TransactionType::Dividend => "dividend",
            TransactionType::Adjustment => "adjustment",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(TransactionType::Deposit),
            "withdrawal" => Some(TransactionType::Withdrawal),
            "transfer" => Some(TransactionType::Transfer),
            "payment" => Some(TransactionType::Payment),
            "refund" => Some(TransactionType::Refund),
            "fee" => Some(TransactionType::Fee),
            "interest" => Some(TransactionType::Interest),
            "dividend" => Some(TransactionType::Dividend),
            "adjustment" => Some(TransactionType::Adjustment),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction lifecycle status
///
/// Lifecycle: `Pending -> Processing -> Completed`, with
/// `Failed`/`Cancelled`/`Reversed` reached through explicit approve/reject
/// actions in the enclosing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting manual approval
    Pending,
    /// Cleared, settlement in flight
    Processing,
    /// Settled
    Completed,
    /// Rejected or errored
    Failed,
    /// Cancelled before settlement
    Cancelled,
    /// Reversed after settlement
    Reversed,
}

impl TransactionStatus {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
            TransactionStatus::Reversed => "reversed",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TransactionStatus::Pending),
            "processing" => Some(TransactionStatus::Processing),
            "completed" => Some(TransactionStatus::Completed),
            "failed" => Some(TransactionStatus::Failed),
            "cancelled" => Some(TransactionStatus::Cancelled),
            "reversed" => Some(TransactionStatus::Reversed),
            _ => None,
        }
    }

    /// True once the lifecycle can no longer advance
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Completed
                | TransactionStatus::Failed
                | TransactionStatus::Cancelled
                | TransactionStatus::Reversed
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted transaction as seen through the history collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique transaction ID
    pub id: Uuid,

    /// Initiating party
    pub user_id: UserId,

    /// Amount (exact decimal)
    pub amount: Decimal,

    /// Transaction type
    pub transaction_type: TransactionType,

    /// Lifecycle status
    pub status: TransactionStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Counterparty metadata attached to a proposed transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterpartyInfo {
    /// ISO-like country code
    pub country: Option<String>,

    /// First transaction with this counterparty
    pub is_new_counterparty: bool,

    /// Counterparty matched a sanctions list
    pub sanctions_hit: bool,
}

/// A transaction proposed for evaluation, not yet persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedTransaction {
    /// Initiating party
    pub user_id: UserId,

    /// Amount (exact decimal, non-negative)
    pub amount: Decimal,

    /// Transaction type
    pub transaction_type: TransactionType,

    /// Counterparty metadata, when known
    pub counterparty: Option<CounterpartyInfo>,
}

impl ProposedTransaction {
    /// Create a proposed transaction
    ///
    /// Rejects negative amounts so downstream scoring and limit checks only
    /// ever see non-negative decimals.
    pub fn new(
        user_id: UserId,
        amount: Decimal,
        transaction_type: TransactionType,
    ) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(Error::NegativeAmount(amount));
        }
        Ok(Self {
            user_id,
            amount,
            transaction_type,
            counterparty: None,
        })
    }

    /// Attach counterparty metadata
    pub fn with_counterparty(mut self, counterparty: CounterpartyInfo) -> Self {
        self.counterparty = Some(counterparty);
        self
    }
}
