//! Transaction evaluation orchestrator

use crate::EngineConfig;
use chrono::{DateTime, Utc};
use compliance_monitor::{AmlRequirements, AmlScreener, ComplianceResult, LimitChecker};
use risk_engine::{RiskAssessment, RiskAssessor, RiskLevel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use transaction_core::{ProposedTransaction, TransactionStatus, TransactionStore};

/// Outcome of evaluating a proposed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionOutcome {
    /// Limits violated; the caller must reject with the violation details
    Blocked,
    /// Cleared to proceed with the given initial status
    Proceed(TransactionStatus),
}

/// Decision bundle returned to the caller
///
/// The caller persists these fields onto the transaction record and forwards
/// the factors, violations, and reasons to its audit log. For `Pending` and
/// `Processing` statuses a later approve/reject action outside this core
/// finalizes the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Blocked, or cleared with an initial status
    pub outcome: DecisionOutcome,

    /// Risk assessment
    pub risk_assessment: RiskAssessment,

    /// Limit compliance result
    pub compliance_result: ComplianceResult,

    /// AML requirements
    pub aml_requirements: AmlRequirements,

    /// Evaluation timestamp
    pub evaluated_at: DateTime<Utc>,
}

impl Decision {
    /// True if the transaction must be rejected
    pub fn is_blocked(&self) -> bool {
        self.outcome == DecisionOutcome::Blocked
    }

    /// Recommended initial status, when not blocked
    pub fn initial_status(&self) -> Option<TransactionStatus> {
        match self.outcome {
            DecisionOutcome::Blocked => None,
            DecisionOutcome::Proceed(status) => Some(status),
        }
    }
}

/// Transaction orchestrator
///
/// Runs risk assessment, limit checking, and AML screening over a proposed
/// transaction and derives the decision bundle. The three checks are
/// independent; the limit check never consults the risk score.
pub struct TransactionOrchestrator {
    risk: RiskAssessor,
    limits: LimitChecker,
    aml: AmlScreener,
}

impl TransactionOrchestrator {
    /// Create new orchestrator over a shared history store
    pub fn new(config: EngineConfig, store: Arc<dyn TransactionStore>) -> Self {
        Self {
            risk: RiskAssessor::new(config.risk, Arc::clone(&store)),
            limits: LimitChecker::new(config.limits, Arc::clone(&store)),
            aml: AmlScreener::new(config.aml, store),
        }
    }

    /// Evaluate a proposed transaction as of the given instant
    ///
    /// Never fails: every sub-component fails closed, so the worst case is
    /// a blocked or review-requiring decision. A limit violation blocks
    /// regardless of risk level; otherwise the initial status follows the
    /// risk band (critical to pending, high to processing, else completed).
    pub fn evaluate(&self, proposed: &ProposedTransaction, as_of: DateTime<Utc>) -> Decision {
        let risk_assessment = self.risk.assess(proposed, as_of);
        let compliance_result = self.limits.check_limits(
            &proposed.user_id,
            proposed.amount,
            proposed.transaction_type,
            as_of,
        );
        let aml_requirements = self.aml.check_aml(&proposed.user_id, proposed.amount, as_of);

        let outcome = if !compliance_result.compliant {
            info!(
                "transaction blocked for {}: {} violation(s)",
                proposed.user_id,
                compliance_result.violations.len()
            );
            DecisionOutcome::Blocked
        } else {
            let status = match risk_assessment.risk_level {
                RiskLevel::Critical => TransactionStatus::Pending,
                RiskLevel::High => TransactionStatus::Processing,
                _ => TransactionStatus::Completed,
            };
            if status != TransactionStatus::Completed {
                info!(
                    "transaction for {} held for review: risk {} ({})",
                    proposed.user_id,
                    risk_assessment.risk_score,
                    risk_assessment.risk_level.as_str()
                );
            }
            DecisionOutcome::Proceed(status)
        };

        Decision {
            outcome,
            risk_assessment,
            compliance_result,
            aml_requirements,
            evaluated_at: as_of,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use transaction_core::{CounterpartyInfo, MemoryStore, TransactionType, UserId};

    fn orchestrator() -> TransactionOrchestrator {
        TransactionOrchestrator::new(EngineConfig::default(), Arc::new(MemoryStore::new()))
    }

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_low_risk_completes() {
        let proposed = ProposedTransaction::new(
            UserId::new("u1"),
            Decimal::from(100),
            TransactionType::Payment,
        )
        .unwrap();

        let decision = orchestrator().evaluate(&proposed, as_of());

        assert_eq!(
            decision.outcome,
            DecisionOutcome::Proceed(TransactionStatus::Completed)
        );
        assert_eq!(decision.initial_status(), Some(TransactionStatus::Completed));
        assert!(!decision.is_blocked());
    }

    #[test]
    fn test_high_risk_processes() {
        // 30 (amount) + 20 (type) = 50: high band
        let proposed = ProposedTransaction::new(
            UserId::new("u1"),
            Decimal::from(15_000),
            TransactionType::Withdrawal,
        )
        .unwrap();

        let decision = orchestrator().evaluate(&proposed, as_of());

        assert_eq!(
            decision.outcome,
            DecisionOutcome::Proceed(TransactionStatus::Processing)
        );
        assert!(decision.risk_assessment.requires_approval);
    }

    #[test]
    fn test_critical_risk_pends() {
        let proposed = ProposedTransaction::new(
            UserId::new("u1"),
            Decimal::from(12_000),
            TransactionType::Withdrawal,
        )
        .unwrap()
        .with_counterparty(CounterpartyInfo {
            country: None,
            is_new_counterparty: false,
            sanctions_hit: true,
        });

        let decision = orchestrator().evaluate(&proposed, as_of());

        assert_eq!(
            decision.outcome,
            DecisionOutcome::Proceed(TransactionStatus::Pending)
        );
        assert_eq!(decision.risk_assessment.risk_score, 100);
        assert!(decision.risk_assessment.requires_additional_verification);
    }
}
