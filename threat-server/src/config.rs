//! Configuration module

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use threatwatch_core::RiskThresholds;

/// Default provider endpoints
pub const DEFAULT_ABUSEIPDB_URL: &str = "https://api.abuseipdb.com/api/v2/check";
pub const DEFAULT_IPQS_URL: &str = "https://www.ipqualityscore.com/api/json/ip";
pub const DEFAULT_IPAPI_URL: &str = "https://ipapi.co";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Reputation provider key; lookups against it fail fast when unset
    pub abuseipdb_api_key: Option<String>,

    /// Fraud-signal provider key; lookups against it fail fast when unset
    pub ipqs_api_key: Option<String>,

    pub abuseipdb_url: String,
    pub ipqs_url: String,
    pub ipapi_url: String,

    /// Per-request timeout for provider calls (seconds)
    pub provider_timeout_secs: u64,

    /// How long an aggregated record is served from cache (seconds)
    pub cache_ttl_secs: u64,

    /// Where the lookup history is persisted, if anywhere
    pub history_file: Option<PathBuf>,

    /// Risk classification thresholds
    pub thresholds: RiskThresholds,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = RiskThresholds::default();

        Self {
            port: env_parse("PORT", 8080),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            abuseipdb_api_key: env_non_empty("ABUSEIPDB_API_KEY"),
            ipqs_api_key: env_non_empty("IPQS_API_KEY"),

            abuseipdb_url: env::var("ABUSEIPDB_URL")
                .unwrap_or_else(|_| DEFAULT_ABUSEIPDB_URL.to_string()),
            ipqs_url: env::var("IPQS_URL").unwrap_or_else(|_| DEFAULT_IPQS_URL.to_string()),
            ipapi_url: env::var("IPAPI_URL").unwrap_or_else(|_| DEFAULT_IPAPI_URL.to_string()),

            provider_timeout_secs: env_parse("PROVIDER_TIMEOUT_SECS", 10),
            cache_ttl_secs: env_parse("CACHE_TTL_SECS", 300),

            history_file: env_non_empty("HISTORY_FILE").map(PathBuf::from),

            thresholds: RiskThresholds {
                abuse_high: env_parse("RISK_ABUSE_HIGH", defaults.abuse_high),
                fraud_high: env_parse("RISK_FRAUD_HIGH", defaults.fraud_high),
                abuse_medium: env_parse("RISK_ABUSE_MEDIUM", defaults.abuse_medium),
                fraud_medium: env_parse("RISK_FRAUD_MEDIUM", defaults.fraud_medium),
            },
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            abuseipdb_api_key: None,
            ipqs_api_key: None,
            abuseipdb_url: DEFAULT_ABUSEIPDB_URL.to_string(),
            ipqs_url: DEFAULT_IPQS_URL.to_string(),
            ipapi_url: DEFAULT_IPAPI_URL.to_string(),
            provider_timeout_secs: 10,
            cache_ttl_secs: 300,
            history_file: None,
            thresholds: RiskThresholds::default(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
