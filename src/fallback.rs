//! Numeric fallback codes.
//!
//! When no name survives reconciliation, a 4-digit code beginning with `4`
//! (`4000`–`4999`, word-delimited) is the next best reference to a person.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b4[0-9]{3}\b").expect("CODE regex is invalid"));

/// All fallback codes in `text`, left to right.
#[must_use]
pub fn extract_codes(text: &str) -> Vec<String> {
    CODE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
