//! Central Configuration Constants
//!
//! Single source of truth for limits and user-facing messages.

/// App name
pub const APP_NAME: &str = "ThreatWatch";

/// Maximum number of distinct addresses kept in the lookup history
pub const MAX_HISTORY_SIZE: usize = 10;

/// Number of history entries returned when the caller does not ask for more
pub const DEFAULT_HISTORY_VIEW: usize = 5;

/// Report window requested from the reputation provider (days)
pub const ABUSE_DB_MAX_AGE_DAYS: u32 = 90;

// ============================================
// Messages returned to API clients
// ============================================

pub const ERROR_IP_EMPTY: &str = "IP address cannot be empty.";

pub const ERROR_IP_FORMAT: &str = "Please enter a valid IPv4 format (e.g., 8.8.8.8).";

pub const ERROR_RATE_LIMIT: &str = "Rate limit reached, please try again later.";

pub const ERROR_ALL_SOURCES_FAILED: &str =
    "An error occurred while fetching data. Please try again. (All sources failed)";
