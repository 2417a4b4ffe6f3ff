//! ThreatWatch Core
//!
//! Pure building blocks for IP threat lookups.
//!
//! ## Structure
//! - `intel`: wire payloads from the three intelligence providers
//! - `threat`: canonical record, aggregation and risk classification
//! - `validation`: IPv4 input checks
//! - `history`: bounded, de-duplicated lookup history
//! - `cache`: time-expiring in-memory cache
//! - `constants`: limits and user-facing messages
//!
//! ## Usage
//! ```ignore
//! use threatwatch_core::threat::{aggregate, classify_risk, RiskLevel};
//!
//! let record = aggregate("8.8.8.8", reputation.as_ref(), fraud.as_ref(), geo.as_ref());
//! match classify_risk(&record) {
//!     RiskLevel::High => println!("Block"),
//!     RiskLevel::Medium => println!("Review"),
//!     _ => println!("Allow"),
//! }
//! ```

pub mod cache;
pub mod constants;
pub mod history;
pub mod intel;
pub mod threat;
pub mod validation;

pub use cache::TtlCache;
pub use history::LookupHistory;
pub use intel::{FraudSignalPayload, GeoPayload, ReputationPayload};
pub use threat::{
    aggregate, classify_risk, classify_risk_with_thresholds, RiskLevel, RiskThresholds,
    ThreatRecord,
};
pub use validation::validate_ip;
