//! Risk Classification Rules & Thresholds
//!
//! Constants and config only. Classification logic lives in `classifier`.
//! All thresholds are inclusive lower bounds.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (defaults)
// ============================================================================

/// Abuse score at or above this = HIGH
pub const ABUSE_HIGH: i64 = 75;

/// Threat score at or above this = HIGH, but only with VPN/proxy detected
pub const FRAUD_HIGH: i64 = 50;

/// Abuse score at or above this = MEDIUM
pub const ABUSE_MEDIUM: i64 = 30;

/// Threat score at or above this = MEDIUM
pub const FRAUD_MEDIUM: i64 = 30;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

/// Thresholds for risk classification (configurable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub abuse_high: i64,
    pub fraud_high: i64,
    pub abuse_medium: i64,
    pub fraud_medium: i64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            abuse_high: ABUSE_HIGH,
            fraud_high: FRAUD_HIGH,
            abuse_medium: ABUSE_MEDIUM,
            fraud_medium: FRAUD_MEDIUM,
        }
    }
}
