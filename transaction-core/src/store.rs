//! Transaction history access

use crate::{Result, TimeWindow, TransactionRecord, UserId};

/// Read access to a user's transaction history
///
/// Implemented by the enclosing system, typically over the transaction
/// database. The evaluation core only reads through this trait; any failure
/// here is treated by the callers as a reason to fail closed rather than
/// approve blind.
pub trait TransactionStore: Send + Sync {
    /// Transactions for `user` whose `created_at` falls inside `window`
    fn transactions_for(&self, user: &UserId, window: TimeWindow)
        -> Result<Vec<TransactionRecord>>;
}

/// Vec-backed store for tests and demos
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<TransactionRecord>,
}

impl MemoryStore {
    /// Create empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record
    pub fn insert(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records are stored
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TransactionStore for MemoryStore {
    fn transactions_for(
        &self,
        user: &UserId,
        window: TimeWindow,
    ) -> Result<Vec<TransactionRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| &record.user_id == user && window.contains(record.created_at))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransactionStatus, TransactionType};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn record(user: &str, amount: i64, age_days: i64) -> TransactionRecord {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        TransactionRecord {
            id: Uuid::new_v4(),
            user_id: UserId::new(user),
            amount: Decimal::from(amount),
            transaction_type: TransactionType::Payment,
            status: TransactionStatus::Completed,
            created_at: now - Duration::days(age_days),
        }
    }

    #[test]
    fn test_memory_store_filters_by_user_and_window() {
        let mut store = MemoryStore::new();
        store.insert(record("alice", 100, 1));
        store.insert(record("alice", 200, 10));
        store.insert(record("bob", 300, 1));

        let as_of = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let window = TimeWindow::last_days(as_of, 7);

        let results = store
            .transactions_for(&UserId::new("alice"), window)
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].amount, Decimal::from(100));
    }
}
