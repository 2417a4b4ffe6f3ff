//! Provider payload types
//!
//! Every field is optional on the wire. A payload that is present but empty is
//! still distinct from a provider that failed (`Option::None` at call sites).

use serde::{Deserialize, Serialize};

// ============================================================================
// REPUTATION (AbuseIPDB)
// ============================================================================

/// `data` object of an AbuseIPDB `check` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReputationPayload {
    /// Confidence that the address is abusive (0 - 100)
    pub abuse_confidence_score: Option<i64>,
    /// Number of abuse reports within the requested window
    pub total_reports: Option<i64>,
    /// ISO country code, e.g. "US"
    pub country_code: Option<String>,
    /// Reverse-DNS names; AbuseIPDB sends `null` when unknown
    pub hostnames: Option<Vec<String>>,
    pub isp: Option<String>,
}

impl ReputationPayload {
    /// First reported hostname, if any
    pub fn first_hostname(&self) -> Option<&str> {
        self.hostnames
            .as_ref()
            .and_then(|names| names.first())
            .map(String::as_str)
    }
}

/// AbuseIPDB wraps the payload in a `data` envelope
#[derive(Debug, Deserialize)]
pub struct ReputationEnvelope {
    pub data: ReputationPayload,
}

// ============================================================================
// FRAUD SIGNAL (IPQualityScore)
// ============================================================================

/// IPQualityScore IP reputation response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudSignalPayload {
    pub vpn: bool,
    pub proxy: bool,
    /// Behavioural fraud score (0 - 100)
    pub fraud_score: Option<i64>,
    /// Reverse-DNS host, often empty
    pub host: Option<String>,
    pub country_code: Option<String>,
}

// ============================================================================
// GEOLOCATION (ipapi.co)
// ============================================================================

/// ipapi.co `/{ip}/json/` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoPayload {
    pub hostname: Option<String>,
    pub isp: Option<String>,
    /// Alternate organisation name, used when `isp` is blank
    pub org: Option<String>,
    /// Display name, e.g. "United States"
    pub country_name: Option<String>,
}

/// ipapi.co reports lookup failures in-band with `"error": true`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeoErrorBody {
    pub error: bool,
    pub reason: Option<String>,
}
