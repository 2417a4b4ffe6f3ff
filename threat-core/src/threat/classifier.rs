//! Risk Classifier
//!
//! Classification logic only - thresholds live in `rules`, types in `types`.
//! Input: ThreatRecord
//! Output: RiskLevel (never `Unknown`)

use super::rules::RiskThresholds;
use super::types::{RiskLevel, ThreatRecord};

/// Classify with the default thresholds
pub fn classify_risk(record: &ThreatRecord) -> RiskLevel {
    classify_risk_with_thresholds(record, &RiskThresholds::default())
}

/// Classification with custom thresholds
///
/// Rules are checked in order and the first match wins:
/// 1. HIGH: abuse score at HIGH, or VPN/proxy together with threat score at HIGH
/// 2. MEDIUM: abuse score or threat score at MEDIUM
/// 3. LOW
pub fn classify_risk_with_thresholds(
    record: &ThreatRecord,
    thresholds: &RiskThresholds,
) -> RiskLevel {
    let abuse_score = record.abuse_score;
    let threat_score = record.threat_score;

    // VPN/proxy alone never escalates
    if abuse_score >= thresholds.abuse_high
        || (record.vpn_proxy_detected && threat_score >= thresholds.fraud_high)
    {
        return RiskLevel::High;
    }

    if abuse_score >= thresholds.abuse_medium || threat_score >= thresholds.fraud_medium {
        return RiskLevel::Medium;
    }

    RiskLevel::Low
}

// ============================================================================
// TESTS
// ============================================================================
