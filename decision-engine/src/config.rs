//! Configuration for the decision engine

use crate::{Error, Result};
use compliance_monitor::{AmlConfig, LimitConfig};
use risk_engine::RiskConfig;
use serde::{Deserialize, Serialize};

/// Decision engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Risk scoring configuration
    pub risk: RiskConfig,

    /// Rolling limit configuration
    pub limits: LimitConfig,

    /// AML screening configuration
    pub aml: AmlConfig,
}

impl EngineConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load defaults with environment overrides
    pub fn from_env() -> Result<Self> {
        let mut config = EngineConfig::default();

        if let Ok(limit) = std::env::var("DECISION_DAILY_LIMIT") {
            config.limits.daily_limit = limit
                .parse()
                .map_err(|e| Error::Config(format!("DECISION_DAILY_LIMIT: {}", e)))?;
        }

        if let Ok(limit) = std::env::var("DECISION_MONTHLY_LIMIT") {
            config.limits.monthly_limit = limit
                .parse()
                .map_err(|e| Error::Config(format!("DECISION_MONTHLY_LIMIT: {}", e)))?;
        }

        if let Ok(countries) = std::env::var("DECISION_HIGH_RISK_COUNTRIES") {
            config.risk.high_risk_countries = countries
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
        }

        Ok(config)
    }
}
