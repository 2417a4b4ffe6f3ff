//! Intelligence provider clients
//!
//! # Components
//! - `abuseipdb.rs`: reputation (abuse confidence, report volume)
//! - `ipqs.rs`: fraud signal (VPN/proxy, fraud score)
//! - `ipapi.rs`: geolocation (hostname, ISP, country)
//!
//! Each client returns the provider's payload or a `ProviderError`; the lookup
//! flow turns failures into absent payloads.

pub mod abuseipdb;
pub mod ipapi;
pub mod ipqs;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

pub use abuseipdb::fetch_reputation;
pub use ipapi::fetch_geolocation;
pub use ipqs::fetch_fraud_signal;

// ============================================================================
// PROVIDERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    AbuseIpDb,
    IpQualityScore,
    IpApi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::AbuseIpDb => "AbuseIPDB",
            Provider::IpQualityScore => "IPQualityScore",
            Provider::IpApi => "IPAPI",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Key for a keyed provider is not configured; no request was sent
    #[error("{0} is not set.")]
    MissingApiKey(&'static str),

    #[error("Rate limit reached for the external API. Please try again later.")]
    RateLimited,

    /// Non-success HTTP status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Provider answered 200 but reported a failure in the body
    #[error("{0}")]
    Upstream(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ProviderError::RateLimited)
    }

    /// HTTP status the provider answered with, when it answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProviderError::RateLimited => Some(429),
            ProviderError::Status { status, .. } => Some(*status),
            ProviderError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// `{"errors": [{"detail": ...}]}` as sent by AbuseIPDB
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpstreamErrorBody {
    errors: Vec<UpstreamErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpstreamErrorDetail {
    detail: Option<String>,
}

/// Pass successful responses through, convert everything else to an error
pub(crate) async fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited);
    }

    // Body is advisory only
    let detail = response
        .json::<UpstreamErrorBody>()
        .await
        .ok()
        .and_then(|body| body.errors.into_iter().next())
        .and_then(|error| error.detail);

    Err(ProviderError::Status {
        status: status.as_u16(),
        message: detail.unwrap_or_else(|| format!("API returned status {}", status.as_u16())),
    })
}

// ============================================================================
// TEST SUPPORT
// ============================================================================
