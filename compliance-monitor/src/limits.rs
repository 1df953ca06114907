//! Rolling transaction limit checking

use crate::types::{ComplianceResult, LimitViolation, UsageWindow, ViolationKind};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use transaction_core::{
    TimeWindow, TransactionStatus, TransactionStore, TransactionType, UserId,
};

/// Limit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Daily limit per user
    pub daily_limit: Decimal,

    /// Monthly limit per user
    pub monthly_limit: Decimal,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            daily_limit: Decimal::from(50_000),
            monthly_limit: Decimal::from(500_000),
        }
    }
}

/// Limit checker
pub struct LimitChecker {
    config: LimitConfig,
    store: Arc<dyn TransactionStore>,
}

impl LimitChecker {
    /// Create new limit checker
    pub fn new(config: LimitConfig, store: Arc<dyn TransactionStore>) -> Self {
        Self { config, store }
    }

    /// Check a proposed amount against the user's rolling daily and monthly
    /// limits.
    ///
    /// Usage counts *completed* transactions only, over the calendar day and
    /// calendar month (UTC) containing `as_of`. Never fails: a monitoring
    /// error yields a fail-closed non-compliant result.
    pub fn check_limits(
        &self,
        user: &UserId,
        amount: Decimal,
        _transaction_type: TransactionType,
        as_of: DateTime<Utc>,
    ) -> ComplianceResult {
        match self.try_check_limits(user, amount, as_of) {
            Ok(result) => result,
            Err(e) => {
                warn!("limit check failed for {}: {}; failing closed", user, e);
                ComplianceResult::monitoring_error(amount, &self.config, as_of)
            }
        }
    }

    fn try_check_limits(
        &self,
        user: &UserId,
        amount: Decimal,
        as_of: DateTime<Utc>,
    ) -> Result<ComplianceResult> {
        let daily_current = self.completed_volume(user, TimeWindow::calendar_day(as_of))?;
        let monthly_current = self.completed_volume(user, TimeWindow::calendar_month(as_of))?;

        let mut violations = Vec::new();

        let daily_total = daily_current
            .checked_add(amount)
            .ok_or_else(|| Error::Aggregation("daily total".to_string()))?;
        if daily_total > self.config.daily_limit {
            violations.push(LimitViolation {
                kind: ViolationKind::DailyLimitExceeded,
                current: daily_current,
                limit: self.config.daily_limit,
                attempted: amount,
            });
        }

        let monthly_total = monthly_current
            .checked_add(amount)
            .ok_or_else(|| Error::Aggregation("monthly total".to_string()))?;
        if monthly_total > self.config.monthly_limit {
            violations.push(LimitViolation {
                kind: ViolationKind::MonthlyLimitExceeded,
                current: monthly_current,
                limit: self.config.monthly_limit,
                attempted: amount,
            });
        }

        if !violations.is_empty() {
            warn!(
                "limit violation(s) for {}: {} attempted with daily {} / monthly {}",
                user, amount, daily_current, monthly_current
            );
        }

        Ok(ComplianceResult::new(
            violations,
            UsageWindow::new(daily_current, self.config.daily_limit),
            UsageWindow::new(monthly_current, self.config.monthly_limit),
            as_of,
        ))
    }

    /// Sum of completed transaction amounts inside `window`
    fn completed_volume(&self, user: &UserId, window: TimeWindow) -> Result<Decimal> {
        let history = self.store.transactions_for(user, window)?;

        let mut total = Decimal::ZERO;
        for tx in history
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Completed)
        {
            total = total
                .checked_add(tx.amount)
                .ok_or_else(|| Error::Aggregation("completed volume".to_string()))?;
        }
        Ok(total)
    }
}
