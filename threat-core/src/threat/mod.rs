//! Threat Module
//!
//! Merges provider payloads into one record and grades it LOW/MEDIUM/HIGH.
//!
//! ## Structure
//! - `types`: ThreatRecord, RiskLevel
//! - `rules`: thresholds and constants
//! - `aggregator`: source-priority merge
//! - `classifier`: risk classification logic

pub mod aggregator;
pub mod classifier;
pub mod rules;
pub mod types;

pub use types::{RiskLevel, ThreatRecord};

pub use rules::{RiskThresholds, ABUSE_HIGH, ABUSE_MEDIUM, FRAUD_HIGH, FRAUD_MEDIUM};

pub use aggregator::{aggregate, first_non_empty};
pub use classifier::{classify_risk, classify_risk_with_thresholds};
