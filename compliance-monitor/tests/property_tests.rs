//! Property-based tests for compliance invariants

use chrono::{DateTime, Duration, TimeZone, Utc};
use compliance_monitor::{AmlConfig, AmlScreener, LimitChecker, LimitConfig, ViolationKind};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;
use transaction_core::{
    MemoryStore, TransactionRecord, TransactionStatus, TransactionType, UserId,
};
use uuid::Uuid;

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

fn store_of(amounts: &[u32]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for amount in amounts {
        store.insert(TransactionRecord {
            id: Uuid::new_v4(),
            user_id: UserId::new("u1"),
            amount: Decimal::from(*amount),
            transaction_type: TransactionType::Payment,
            status: TransactionStatus::Completed,
            created_at: as_of() - Duration::hours(4),
        });
    }
    store
}

proptest! {
    /// Property: each violation kind appears at most once per check.
    #[test]
    fn violation_kinds_are_distinct(
        amounts in prop::collection::vec(0u32..40_000, 0..15),
        attempted in 0u32..200_000,
    ) {
        let checker = LimitChecker::new(LimitConfig::default(), Arc::new(store_of(&amounts)));
        let result = checker.check_limits(
            &UserId::new("u1"),
            Decimal::from(attempted),
            TransactionType::Payment,
            as_of(),
        );

        let daily = result
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::DailyLimitExceeded)
            .count();
        let monthly = result
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::MonthlyLimitExceeded)
            .count();
        prop_assert!(daily <= 1);
        prop_assert!(monthly <= 1);
        prop_assert!(result.violations.len() <= 2);
    }

    /// Property: monitoring is always flagged as having run, whatever the
    /// amount and history.
    #[test]
    fn transaction_monitoring_always_on(
        amounts in prop::collection::vec(0u32..20_000, 0..10),
        amount in 0u32..100_000,
    ) {
        let screener = AmlScreener::new(AmlConfig::default(), Arc::new(store_of(&amounts)));
        let requirements = screener.check_aml(&UserId::new("u1"), Decimal::from(amount), as_of());

        prop_assert!(requirements.transaction_monitoring);
    }

    /// Property: a suspicious activity report always comes with at least
    /// one reason.
    #[test]
    fn sar_implies_reasons(
        amounts in prop::collection::vec(0u32..20_000, 0..30),
        amount in 0u32..100_000,
    ) {
        let screener = AmlScreener::new(AmlConfig::default(), Arc::new(store_of(&amounts)));
        let requirements = screener.check_aml(&UserId::new("u1"), Decimal::from(amount), as_of());

        if requirements.suspicious_activity_report {
            prop_assert!(!requirements.reasons.is_empty());
        }
    }
}
