//! Risk scoring engine

use crate::{Error, Result, RiskAssessment};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use transaction_core::{
    ProposedTransaction, TimeWindow, TransactionRecord, TransactionStatus, TransactionStore,
    TransactionType,
};

/// Risk scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Amount above which a transaction scores as high value
    pub high_amount_threshold: Decimal,

    /// Amount above which a transaction scores as medium value
    pub medium_amount_threshold: Decimal,

    /// Counterparty jurisdictions treated as high risk
    ///
    /// The default list is a placeholder; deployments source this from
    /// their sanctions/jurisdiction configuration.
    pub high_risk_countries: Vec<String>,

    /// User history window (days)
    pub history_window_days: i64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_amount_threshold: Decimal::from(10_000),
            medium_amount_threshold: Decimal::from(5_000),
            high_risk_countries: vec!["IR".to_string(), "KP".to_string(), "MM".to_string()],
            history_window_days: 30,
        }
    }
}

/// Behavioural statistics over a user's recent history
struct HistoryStats {
    count: usize,
    failure_rate: Decimal,
    large_count: usize,
}

/// Risk assessor
pub struct RiskAssessor {
    config: RiskConfig,
    store: Arc<dyn TransactionStore>,
}

impl RiskAssessor {
    /// Create new risk assessor
    pub fn new(config: RiskConfig, store: Arc<dyn TransactionStore>) -> Self {
        Self { config, store }
    }

    /// Assess a proposed transaction
    ///
    /// Never fails: an internal error yields the fail-closed critical
    /// assessment instead of propagating, so a broken assessor cannot
    /// silently approve a transaction.
    pub fn assess(&self, proposed: &ProposedTransaction, as_of: DateTime<Utc>) -> RiskAssessment {
        match self.try_assess(proposed, as_of) {
            Ok(assessment) => assessment,
            Err(e) => {
                warn!(
                    "risk assessment failed for {}: {}; failing closed",
                    proposed.user_id, e
                );
                RiskAssessment::fail_closed(as_of)
            }
        }
    }

    /// Score factors in fixed order: amount, user history, transaction
    /// type, counterparty. Factor order is part of the contract; audit
    /// trails depend on it.
    fn try_assess(
        &self,
        proposed: &ProposedTransaction,
        as_of: DateTime<Utc>,
    ) -> Result<RiskAssessment> {
        let mut score = 0u32;
        let mut factors = Vec::new();

        // 1. Amount tier
        if proposed.amount > self.config.high_amount_threshold {
            score += 30;
            factors.push("High transaction amount".to_string());
        } else if proposed.amount > self.config.medium_amount_threshold {
            score += 15;
            factors.push("Medium transaction amount".to_string());
        }

        // 2. User history
        let window = TimeWindow::last_days(as_of, self.config.history_window_days);
        let history = self.store.transactions_for(&proposed.user_id, window)?;
        let (history_score, history_factors) = self.history_risk(&history);
        score += history_score;
        factors.extend(history_factors);

        // 3. Transaction type
        if matches!(
            proposed.transaction_type,
            TransactionType::Withdrawal | TransactionType::Transfer
        ) {
            score += 20;
            factors.push(format!(
                "High-risk transaction type: {}",
                proposed.transaction_type
            ));
        }

        // 4. Counterparty
        if let Some(counterparty) = &proposed.counterparty {
            if let Some(country) = &counterparty.country {
                if self.config.high_risk_countries.iter().any(|c| c == country) {
                    score += 30;
                    factors.push(format!("High-risk counterparty country: {country}"));
                }
            }
            if counterparty.is_new_counterparty {
                score += 15;
                factors.push("New counterparty".to_string());
            }
            if counterparty.sanctions_hit {
                score += 50;
                factors.push("Counterparty sanctions hit".to_string());
            }
        }

        Ok(RiskAssessment::from_score(score, factors, as_of))
    }

    /// Behavioural score over the user's recent transactions
    ///
    /// A statistics failure falls back to a flat penalty for this sub-step
    /// only; it does not abort the rest of the assessment.
    fn history_risk(&self, history: &[TransactionRecord]) -> (u32, Vec<String>) {
        let stats = match self.history_stats(history) {
            Ok(stats) => stats,
            Err(e) => {
                warn!("user history statistics failed: {}", e);
                return (50, vec!["User risk assessment error".to_string()]);
            }
        };

        let mut score = 0u32;
        let mut factors = Vec::new();

        if stats.count > 50 {
            score += 25;
            factors.push("High transaction frequency".to_string());
        } else if stats.count > 20 {
            score += 10;
            factors.push("Medium transaction frequency".to_string());
        }

        if stats.failure_rate > Decimal::new(2, 1) {
            score += 20;
            factors.push("High transaction failure rate".to_string());
        } else if stats.failure_rate > Decimal::new(1, 1) {
            score += 10;
            factors.push("Elevated transaction failure rate".to_string());
        }

        if stats.large_count > 5 {
            score += 15;
            factors.push("Frequent large transactions".to_string());
        }

        (score, factors)
    }

    fn history_stats(&self, history: &[TransactionRecord]) -> Result<HistoryStats> {
        let count = history.len();
        let failed = history
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Failed)
            .count();

        let failure_rate = if count > 0 {
            Decimal::from(failed as u64)
                .checked_div(Decimal::from(count as u64))
                .ok_or_else(|| Error::Statistics("failure rate division".to_string()))?
        } else {
            Decimal::ZERO
        };

        let large_count = history
            .iter()
            .filter(|tx| tx.amount > self.config.medium_amount_threshold)
            .count();

        Ok(HistoryStats {
            count,
            failure_rate,
            large_count,
        })
    }
}
