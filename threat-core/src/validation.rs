//! IPv4 input validation
//!
//! Dotted-quad only. Octets are 0-255 without leading zeros; surrounding
//! whitespace is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

const OCTET: &str = r"(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[1-9]|0)";

static IPV4_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(&format!(r"^{OCTET}(\.{OCTET}){{3}}$")));

/// Check whether `ip` is a well-formed IPv4 address
pub fn validate_ip(ip: &str) -> bool {
    let ip = ip.trim();
    if ip.is_empty() {
        return false;
    }

    match &*IPV4_REGEX {
        Ok(regex) => regex.is_match(ip),
        Err(_) => false,
    }
}
