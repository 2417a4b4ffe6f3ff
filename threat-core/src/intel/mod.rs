//! Intelligence Provider Payloads
//!
//! Wire shapes of the three upstream providers, as consumed by the aggregator.
//!
//! # Providers
//! - Reputation (AbuseIPDB): abuse confidence, report volume
//! - Fraud signal (IPQualityScore): VPN/proxy flags, fraud score
//! - Geolocation (ipapi.co): hostname, ISP, country

pub mod types;

pub use types::{FraudSignalPayload, GeoPayload, ReputationPayload};
