//! IPv4 address detection for listing cells.
//!
//! A cell is linked when it matches four dot-separated octets, each one of
//! `25[0-5]`, `2[0-4][0-9]` or `[01]?[0-9][0-9]?`, with nothing before or
//! after. This is not a general IPv4 validator: the last alternative admits
//! forms such as `099` or `00`, and those must keep matching so existing
//! listings link the same cells.
//!
//! # Example
//!
//! ```
//! use printer_table::is_valid_ip;
//!
//! assert!(is_valid_ip("192.168.1.1"));
//! assert!(is_valid_ip("199.099.1.1"));
//! assert!(!is_valid_ip("256.1.1.1"));
//! assert!(!is_valid_ip("192.168.1.1\r"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a single octet.
const OCTET: &str = r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^{o}\.{o}\.{o}\.{o}$", o = OCTET);
    Regex::new(&pattern).expect("IPv4 pattern is valid")
});

/// Whether the whole string is a linkable IPv4 address.
///
/// Pure and total: every input gives an answer, including `""`.
pub fn is_valid_ip(value: &str) -> bool {
    IPV4_PATTERN.is_match(value)
}
