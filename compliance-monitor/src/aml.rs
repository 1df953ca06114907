//! AML screening heuristics
//!
//! Threshold checks (KYC, enhanced due diligence) on the proposed amount
//! plus suspicious-pattern detection over the user's recent history:
//! high frequency, round-number amounts, and structuring just under the
//! reporting threshold.

use crate::types::AmlRequirements;
use crate::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use transaction_core::{TimeWindow, TransactionStore, UserId};

/// AML screening configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmlConfig {
    /// Amount at which KYC becomes mandatory
    pub kyc_threshold: Decimal,

    /// Amount at which enhanced due diligence becomes mandatory
    pub edd_threshold: Decimal,

    /// Pattern detection window (days)
    pub pattern_window_days: i64,

    /// Transactions in the window above which frequency is suspicious
    pub high_frequency_count: usize,

    /// Amount unit for round-number detection
    pub round_amount_unit: Decimal,

    /// Round-number transactions above which the pattern is suspicious
    pub round_amount_count: usize,

    /// Regulatory reporting threshold
    pub reporting_threshold: Decimal,

    /// Structuring band width below the reporting threshold
    pub structuring_margin: Decimal,

    /// In-band transactions above which structuring is suspected
    pub structuring_count: usize,
}

impl Default for AmlConfig {
    fn default() -> Self {
        Self {
            kyc_threshold: Decimal::from(10_000),
            edd_threshold: Decimal::from(50_000),
            pattern_window_days: 7,
            high_frequency_count: 20,
            round_amount_unit: Decimal::from(1_000),
            round_amount_count: 5,
            reporting_threshold: Decimal::from(9_999),
            structuring_margin: Decimal::from(500),
            structuring_count: 2,
        }
    }
}

/// AML screener
pub struct AmlScreener {
    config: AmlConfig,
    store: Arc<dyn TransactionStore>,
}

impl AmlScreener {
    /// Create new AML screener
    pub fn new(config: AmlConfig, store: Arc<dyn TransactionStore>) -> Self {
        Self { config, store }
    }

    /// Screen a proposed amount against AML thresholds and the user's
    /// recent patterns.
    ///
    /// Never fails: a screening error yields the fail-closed requirements
    /// (KYC and enhanced due diligence both required).
    pub fn check_aml(
        &self,
        user: &UserId,
        amount: Decimal,
        as_of: DateTime<Utc>,
    ) -> AmlRequirements {
        match self.try_check_aml(user, amount, as_of) {
            Ok(requirements) => requirements,
            Err(e) => {
                warn!("AML screening failed for {}: {}; failing closed", user, e);
                AmlRequirements::fail_closed(as_of)
            }
        }
    }

    fn try_check_aml(
        &self,
        user: &UserId,
        amount: Decimal,
        as_of: DateTime<Utc>,
    ) -> Result<AmlRequirements> {
        let mut reasons = Vec::new();
        let mut kyc_required = false;
        let mut enhanced_due_diligence = false;

        if amount >= self.config.kyc_threshold {
            kyc_required = true;
            reasons.push("Large transaction amount".to_string());
        }
        if amount >= self.config.edd_threshold {
            enhanced_due_diligence = true;
            reasons.push("Very large transaction amount".to_string());
        }

        let window = TimeWindow::last_days(as_of, self.config.pattern_window_days);
        let recent = self.store.transactions_for(user, window)?;

        let mut patterns = Vec::new();

        if recent.len() > self.config.high_frequency_count {
            patterns.push("High frequency transactions".to_string());
        }

        let round_count = recent
            .iter()
            .filter(|tx| is_multiple_of(tx.amount, self.config.round_amount_unit))
            .count();
        if round_count > self.config.round_amount_count {
            patterns.push("Multiple round number transactions".to_string());
        }

        let band_low = self.config.reporting_threshold - self.config.structuring_margin;
        let structuring_count = recent
            .iter()
            .filter(|tx| tx.amount >= band_low && tx.amount <= self.config.reporting_threshold)
            .count();
        if structuring_count > self.config.structuring_count {
            patterns.push("Multiple transactions just under reporting threshold".to_string());
        }

        let suspicious_activity_report = !patterns.is_empty();
        if suspicious_activity_report {
            warn!(
                "suspicious activity pattern(s) for {}: {}",
                user,
                patterns.join("; ")
            );
        }
        reasons.extend(patterns);

        Ok(AmlRequirements {
            kyc_required,
            enhanced_due_diligence,
            suspicious_activity_report,
            transaction_monitoring: true,
            reasons,
            checked_at: as_of,
        })
    }
}

fn is_multiple_of(amount: Decimal, unit: Decimal) -> bool {
    match amount.checked_rem(unit) {
        Some(remainder) => remainder.is_zero(),
        None => false,
    }
}
