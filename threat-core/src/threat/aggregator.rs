//! Threat Aggregator
//!
//! Picks the best single source per field. Scores are never blended.
//!
//! Source priority:
//! - identity and location (hostname, ISP, country): geolocation first, it is
//!   queried live per request
//! - report volume: reputation only
//! - VPN/proxy and threat score: fraud signal only

use super::types::ThreatRecord;
use crate::intel::{FraudSignalPayload, GeoPayload, ReputationPayload};

// ============================================================================
// MAIN AGGREGATION FUNCTION
// ============================================================================

/// Merge whatever providers answered into one record.
///
/// Any payload may be `None`; all three `None` yields the all-default record.
pub fn aggregate(
    ip_address: &str,
    reputation: Option<&ReputationPayload>,
    fraud_signal: Option<&FraudSignalPayload>,
    geo: Option<&GeoPayload>,
) -> ThreatRecord {
    let hostname = first_non_empty([
        geo.and_then(|g| g.hostname.as_deref()),
        reputation.and_then(|r| r.first_hostname()),
        fraud_signal.and_then(|f| f.host.as_deref()),
    ]);

    let isp = first_non_empty([
        geo.and_then(|g| g.isp.as_deref()),
        geo.and_then(|g| g.org.as_deref()),
        reputation.and_then(|r| r.isp.as_deref()),
    ]);

    let country = first_non_empty([
        geo.and_then(|g| g.country_name.as_deref()),
        reputation.and_then(|r| r.country_code.as_deref()),
    ]);

    // 0 is a legitimate score, so only a missing value falls back
    let abuse_score = reputation
        .and_then(|r| r.abuse_confidence_score)
        .unwrap_or(0);
    let total_reports = reputation.and_then(|r| r.total_reports).unwrap_or(0);
    let threat_score = fraud_signal.and_then(|f| f.fraud_score).unwrap_or(0);

    let vpn_proxy_detected = fraud_signal.is_some_and(|f| f.vpn || f.proxy);

    ThreatRecord {
        ip_address: ip_address.to_string(),
        hostname,
        isp,
        country,
        abuse_score,
        total_reports,
        vpn_proxy_detected,
        threat_score,
    }
}

/// First candidate that is present and not an empty string
pub fn first_non_empty<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

// ============================================================================
// TESTS
// ============================================================================
