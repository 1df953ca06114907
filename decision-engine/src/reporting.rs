//! Transaction activity summaries
//!
//! Aggregates a user's historical transactions over a window into counts,
//! volumes, and per-type/per-status breakdowns for reporting and audit
//! export.

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use transaction_core::{
    TimeWindow, TransactionStatus, TransactionStore, TransactionType, UserId,
};

/// Count and volume for one breakdown bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketStats {
    /// Transactions in the bucket
    pub count: u64,

    /// Total amount in the bucket
    pub volume: Decimal,
}

/// Aggregate view of a user's activity over a window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// User the summary covers
    pub user_id: UserId,

    /// Window the summary covers
    pub window: TimeWindow,

    /// Transaction count
    pub count: u64,

    /// Total amount across all transactions
    pub total_volume: Decimal,

    /// Mean amount (zero for an empty window)
    pub average_amount: Decimal,

    /// Smallest amount (zero for an empty window)
    pub min_amount: Decimal,

    /// Largest amount (zero for an empty window)
    pub max_amount: Decimal,

    /// Breakdown by transaction type
    pub by_type: HashMap<TransactionType, BucketStats>,

    /// Breakdown by lifecycle status
    pub by_status: HashMap<TransactionStatus, BucketStats>,
}

impl TransactionSummary {
    fn empty(user_id: UserId, window: TimeWindow) -> Self {
        Self {
            user_id,
            window,
            count: 0,
            total_volume: Decimal::ZERO,
            average_amount: Decimal::ZERO,
            min_amount: Decimal::ZERO,
            max_amount: Decimal::ZERO,
            by_type: HashMap::new(),
            by_status: HashMap::new(),
        }
    }
}

/// Transaction reporter
pub struct TransactionReporter {
    store: Arc<dyn TransactionStore>,
}

impl TransactionReporter {
    /// Create new reporter over a history store
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Summarize a user's transactions inside `window`
    ///
    /// An empty window yields the all-zero summary. Unlike the risk and
    /// compliance paths, store failures propagate: reporting is not a
    /// safety decision, so there is nothing to fail closed about.
    pub fn summarize(&self, user: &UserId, window: TimeWindow) -> Result<TransactionSummary> {
        let transactions = self.store.transactions_for(user, window)?;
        if transactions.is_empty() {
            return Ok(TransactionSummary::empty(user.clone(), window));
        }

        let count = transactions.len() as u64;
        let mut total_volume = Decimal::ZERO;
        let mut min_amount = transactions[0].amount;
        let mut max_amount = transactions[0].amount;
        let mut by_type: HashMap<TransactionType, BucketStats> = HashMap::new();
        let mut by_status: HashMap<TransactionStatus, BucketStats> = HashMap::new();

        for tx in &transactions {
            total_volume = total_volume
                .checked_add(tx.amount)
                .ok_or_else(|| Error::Aggregation("total volume".to_string()))?;
            if tx.amount < min_amount {
                min_amount = tx.amount;
            }
            if tx.amount > max_amount {
                max_amount = tx.amount;
            }

            let type_bucket = by_type.entry(tx.transaction_type).or_default();
            type_bucket.count += 1;
            type_bucket.volume = type_bucket
                .volume
                .checked_add(tx.amount)
                .ok_or_else(|| Error::Aggregation("type bucket volume".to_string()))?;

            let status_bucket = by_status.entry(tx.status).or_default();
            status_bucket.count += 1;
            status_bucket.volume = status_bucket
                .volume
                .checked_add(tx.amount)
                .ok_or_else(|| Error::Aggregation("status bucket volume".to_string()))?;
        }

        let average_amount = total_volume
            .checked_div(Decimal::from(count))
            .ok_or_else(|| Error::Aggregation("average amount".to_string()))?;

        Ok(TransactionSummary {
            user_id: user.clone(),
            window,
            count,
            total_volume,
            average_amount,
            min_amount,
            max_amount,
            by_type,
            by_status,
        })
    }
}
