pub mod aml;
pub mod error;
pub mod limits;
pub mod types;

pub use aml::{AmlConfig, AmlScreener};
pub use error::{Error, Result};
pub use limits::{LimitChecker, LimitConfig};
pub use types::{AmlRequirements, ComplianceResult, LimitViolation, UsageWindow, ViolationKind};
