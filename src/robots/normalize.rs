use crate::robots::{EndpointCollector, OutputMode};

/// The directive token every entry is split on
const DISALLOW_TOKEN: &str = "Disallow:";

/// Cleans a single `Disallow:` entry into an endpoint
///
/// # Normalization Steps
///
/// 1. Take the text following the first `Disallow:` token; reject if absent
/// 2. Trim surrounding spaces (tabs and carriage returns included)
/// 3. Reject `/`, `*` and the empty value, which carry no path
/// 4. Remove every `*` wildcard
/// 5. Strip all leading `/`
/// 6. Strip all trailing `/`
/// 7. Reject if nothing is left
/// 8. Compose `<base_url>/<path>` for full URL mode, or the path alone
///
/// Step 3 looks at the value before wildcard removal, so `/*/` passes it
/// and is rejected at step 7 instead.
///
/// # Arguments
///
/// * `entry` - One match produced by the disallow matcher
/// * `base_url` - The target's base URL, without a trailing slash
/// * `mode` - How to render the endpoint
///
/// # Returns
///
/// * `Some(String)` - The cleaned endpoint
/// * `None` - The entry carries no usable path
///
/// # Examples
///
/// ```
/// use disallow_miner::robots::normalize_entry;
/// use disallow_miner::OutputMode;
///
/// let bare = normalize_entry("Disallow: /admin/", "https://example.com", OutputMode::BarePath);
/// assert_eq!(bare.as_deref(), Some("admin"));
///
/// let full = normalize_entry("Disallow: /admin/", "https://example.com", OutputMode::FullUrl);
/// assert_eq!(full.as_deref(), Some("https://example.com/admin"));
/// ```
pub fn normalize_entry(entry: &str, base_url: &str, mode: OutputMode) -> Option<String> {
    let value = entry.split(DISALLOW_TOKEN).nth(1)?;
    let value = value.trim_matches(|c| c == ' ' || c == '\t' || c == '\r');

    if value.is_empty() || value == "/" || value == "*" {
        return None;
    }

    let without_wildcards = value.replace('*', "");
    let path = without_wildcards
        .trim_start_matches('/')
        .trim_end_matches('/');

    if path.is_empty() {
        return None;
    }

    match mode {
        OutputMode::FullUrl => Some(format!("{}/{}", base_url, path)),
        OutputMode::BarePath => Some(path.to_string()),
    }
}

/// Normalizes an entry and records it in the target's collector
///
/// Deduplication runs on the fully normalized string, so `/view/` and
/// `/view/*` count as the same endpoint.
///
/// # Returns
///
/// * `Some(String)` - A new endpoint that was just inserted
/// * `None` - The entry was rejected or already collected
pub fn accept_entry(
    entry: &str,
    base_url: &str,
    mode: OutputMode,
    collector: &mut EndpointCollector,
) -> Option<String> {
    let endpoint = normalize_entry(entry, base_url, mode)?;
    if collector.insert(endpoint.clone()) {
        Some(endpoint)
    } else {
        None
    }
}
