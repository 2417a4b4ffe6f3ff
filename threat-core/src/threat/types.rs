//! Threat Types
//!
//! Core types for IP threat lookups.

use serde::{Deserialize, Serialize};

use super::classifier::classify_risk_with_thresholds;
use super::rules::RiskThresholds;

// ============================================================================
// THREAT RECORD
// ============================================================================

/// Canonical merged result for one address.
///
/// Every field has a defined default so the record can be rendered and stored
/// without knowing which providers answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatRecord {
    /// Queried address, echoed verbatim
    pub ip_address: String,
    pub hostname: Option<String>,
    pub isp: Option<String>,
    pub country: Option<String>,
    /// Abuse confidence from the reputation provider
    #[serde(default)]
    pub abuse_score: i64,
    #[serde(default)]
    pub total_reports: i64,
    #[serde(default)]
    pub vpn_proxy_detected: bool,
    /// Fraud score from the fraud-signal provider
    #[serde(default, alias = "fraudScore")]
    pub threat_score: i64,
}

impl ThreatRecord {
    /// All-default record for an address
    pub fn empty(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Coarse risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// No record loaded yet. Never returned by the classifier.
    Unknown,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Risk label for whatever record a view currently holds
    pub fn for_record(record: Option<&ThreatRecord>, thresholds: &RiskThresholds) -> Self {
        match record {
            Some(record) => classify_risk_with_thresholds(record, thresholds),
            None => RiskLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "UNKNOWN",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
