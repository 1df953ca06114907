use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::limits::LimitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    DailyLimitExceeded,
    MonthlyLimitExceeded,
    MonitoringError,
}

impl ViolationKind {
    pub fn as_str(&self) -> &str {
        match self {
            ViolationKind::DailyLimitExceeded => "daily_limit_exceeded",
            ViolationKind::MonthlyLimitExceeded => "monthly_limit_exceeded",
            ViolationKind::MonitoringError => "monitoring_error",
        }
    }
}

/// One exceeded threshold: the usage before the transaction, the limit,
/// and the amount that was attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitViolation {
    pub kind: ViolationKind,
    pub current: Decimal,
    pub limit: Decimal,
    pub attempted: Decimal,
}

/// Usage against one rolling limit, before adding the proposed amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageWindow {
    pub current: Decimal,
    pub limit: Decimal,
    pub remaining: Decimal,
}

impl UsageWindow {
    pub fn new(current: Decimal, limit: Decimal) -> Self {
        Self {
            current,
            limit,
            remaining: limit - current,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub compliant: bool,
    pub violations: Vec<LimitViolation>,
    pub daily_usage: UsageWindow,
    pub monthly_usage: UsageWindow,
    pub checked_at: DateTime<Utc>,
}

impl ComplianceResult {
    /// `compliant` is derived from `violations` here; the two fields can
    /// never disagree.
    pub fn new(
        violations: Vec<LimitViolation>,
        daily_usage: UsageWindow,
        monthly_usage: UsageWindow,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            compliant: violations.is_empty(),
            violations,
            daily_usage,
            monthly_usage,
            checked_at,
        }
    }

    /// Fail-closed result for when monitoring itself breaks: non-compliant
    /// with a single `monitoring_error` violation.
    pub fn monitoring_error(
        attempted: Decimal,
        config: &LimitConfig,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self::new(
            vec![LimitViolation {
                kind: ViolationKind::MonitoringError,
                current: Decimal::ZERO,
                limit: Decimal::ZERO,
                attempted,
            }],
            UsageWindow::new(Decimal::ZERO, config.daily_limit),
            UsageWindow::new(Decimal::ZERO, config.monthly_limit),
            checked_at,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmlRequirements {
    pub kyc_required: bool,
    pub enhanced_due_diligence: bool,
    pub suspicious_activity_report: bool,
    pub transaction_monitoring: bool,
    pub reasons: Vec<String>,
    pub checked_at: DateTime<Utc>,
}

impl AmlRequirements {
    /// Fail-closed defaults for when screening itself breaks: KYC and
    /// enhanced due diligence both required.
    pub fn fail_closed(checked_at: DateTime<Utc>) -> Self {
        Self {
            kyc_required: true,
            enhanced_due_diligence: true,
            suspicious_activity_report: false,
            transaction_monitoring: true,
            reasons: vec!["AML check error".to_string()],
            checked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compliant_follows_violations() {
        let usage = UsageWindow::new(Decimal::ZERO, Decimal::from(50_000));
        let result = ComplianceResult::new(vec![], usage.clone(), usage.clone(), Utc::now());
        assert!(result.compliant);

        let violation = LimitViolation {
            kind: ViolationKind::DailyLimitExceeded,
            current: Decimal::from(45_000),
            limit: Decimal::from(50_000),
            attempted: Decimal::from(10_000),
        };
        let result = ComplianceResult::new(vec![violation], usage.clone(), usage, Utc::now());
        assert!(!result.compliant);
    }

    #[test]
    fn test_violation_kind_wire_names() {
        assert_eq!(
            ViolationKind::DailyLimitExceeded.as_str(),
            "daily_limit_exceeded"
        );
        assert_eq!(
            ViolationKind::MonthlyLimitExceeded.as_str(),
            "monthly_limit_exceeded"
        );
        assert_eq!(ViolationKind::MonitoringError.as_str(), "monitoring_error");
    }

    #[test]
    fn test_usage_window_remaining() {
        let usage = UsageWindow::new(Decimal::from(45_000), Decimal::from(50_000));
        assert_eq!(usage.remaining, Decimal::from(5_000));
    }
}
