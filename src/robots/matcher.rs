//! Disallow line matching
//!
//! Scans robots.txt content for `Disallow:` directives with a regex rather
//! than a full robots.txt parser, so entries are found regardless of which
//! user-agent group they belong to.

use regex::Regex;
use std::sync::OnceLock;

/// The literal token, one optional whitespace character that is not a
/// newline, then at least one non-newline character. Case-sensitive.
const DISALLOW_PATTERN: &str = r"Disallow:[^\S\n]?.+";

fn disallow_regex() -> &'static Regex {
    static DISALLOW: OnceLock<Regex> = OnceLock::new();
    DISALLOW.get_or_init(|| Regex::new(DISALLOW_PATTERN).expect("disallow pattern is valid"))
}

/// Extracts every `Disallow:` entry from robots.txt content
///
/// Each entry runs from the `Disallow:` token to the end of its line.
/// Entries are returned in document order.
///
/// # Arguments
///
/// * `body` - The raw robots.txt content
///
/// # Returns
///
/// The matched entries; empty when the document has none
pub fn extract_disallow_entries(body: &str) -> Vec<&str> {
    disallow_regex().find_iter(body).map(|m| m.as_str()).collect()
}
