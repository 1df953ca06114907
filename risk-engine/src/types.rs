//! Core types for risk engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk level
///
/// Deterministic banding of the additive risk score. The score itself is
/// unbounded above (typical range 0-150+), so the top band is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 30
    Low,
    /// Score 30-49
    Medium,
    /// Score 50-69
    High,
    /// Score 70 and above
    Critical,
}

impl RiskLevel {
    /// Band a raw score
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=29 => RiskLevel::Low,
            30..=49 => RiskLevel::Medium,
            50..=69 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Manual approval needed before processing
    pub fn requires_approval(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

/// Risk assessment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Additive risk score
    pub risk_score: u32,

    /// Banded risk level
    pub risk_level: RiskLevel,

    /// Contributing factors, in evaluation order
    pub risk_factors: Vec<String>,

    /// Manual approval required before processing
    pub requires_approval: bool,

    /// Additional identity verification required
    pub requires_additional_verification: bool,

    /// Assessment timestamp
    pub assessed_at: DateTime<Utc>,
}

impl RiskAssessment {
    /// Build an assessment from a score and its factors
    ///
    /// The approval flags are derived from the banded level here so they can
    /// never disagree with it.
    pub fn from_score(score: u32, factors: Vec<String>, assessed_at: DateTime<Utc>) -> Self {
        let risk_level = RiskLevel::from_score(score);
        Self {
            risk_score: score,
            risk_level,
            risk_factors: factors,
            requires_approval: risk_level.requires_approval(),
            requires_additional_verification: risk_level == RiskLevel::Critical,
            assessed_at,
        }
    }

    /// Deny-by-default assessment used when scoring itself fails
    ///
    /// Critical level with both flags set: an assessor failure must route
    /// the transaction to manual review, never approve it silently.
    pub fn fail_closed(assessed_at: DateTime<Utc>) -> Self {
        Self::from_score(100, vec!["Risk assessment error".to_string()], assessed_at)
    }
}
