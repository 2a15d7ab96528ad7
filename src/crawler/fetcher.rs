//! Robots.txt fetcher
//!
//! One fetch-and-parse round: request `<root>/robots.txt`, extract every
//! disallow entry on HTTP 200, and feed them through the normalizer into
//! the target's collector.

use crate::crawler::transport::Transport;
use crate::robots::{accept_entry, extract_disallow_entries, EndpointCollector, OutputMode};

/// Path appended to every root URL
pub const ROBOTS_PATH: &str = "/robots.txt";

/// Result of a fetch-and-parse round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsOutcome {
    /// robots.txt answered with HTTP 200 and was parsed
    Parsed {
        /// Number of disallow entries matched
        entries: usize,
        /// Endpoints that were new to the collector, in discovery order
        accepted: Vec<String>,
    },

    /// robots.txt answered with another status; nothing was parsed
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// No HTTP response was obtained
    NetworkError {
        /// Error description
        error: String,
    },
}

impl RobotsOutcome {
    /// Returns true if robots.txt was fetched with HTTP 200
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// Builds the robots.txt URL for a root URL
pub fn robots_url(root_url: &str) -> String {
    format!("{}{}", root_url, ROBOTS_PATH)
}

/// Fetches and parses robots.txt below `root_url`
///
/// # Arguments
///
/// * `transport` - The transport to fetch with
/// * `root_url` - Where robots.txt lives (a live host or an archive replay URL)
/// * `base_url` - The live base URL full-URL endpoints are composed with
/// * `label` - How this round is named in diagnostics
/// * `mode` - How endpoints are rendered
/// * `collector` - The target's collector
///
/// # Returns
///
/// A RobotsOutcome describing the round
pub async fn fetch_robots<T: Transport + ?Sized>(
    transport: &T,
    root_url: &str,
    base_url: &str,
    label: &str,
    mode: OutputMode,
    collector: &mut EndpointCollector,
) -> RobotsOutcome {
    let url = robots_url(root_url);

    let response = match transport.fetch(&url).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("{}", e);
            return RobotsOutcome::NetworkError {
                error: e.to_string(),
            };
        }
    };

    if response.status != 200 {
        tracing::warn!("[{}] {}", response.status, label);
        return RobotsOutcome::HttpError {
            status_code: response.status,
        };
    }

    tracing::info!("[200] {}", label);
    parse_robots(&response.body, base_url, mode, collector)
}

/// Runs extraction and normalization over a fetched robots.txt body
fn parse_robots(
    body: &str,
    base_url: &str,
    mode: OutputMode,
    collector: &mut EndpointCollector,
) -> RobotsOutcome {
    let entries = extract_disallow_entries(body);
    if entries.is_empty() {
        tracing::info!("Nothing found here...");
        return RobotsOutcome::Parsed {
            entries: 0,
            accepted: Vec::new(),
        };
    }

    tracing::info!(
        "Total entries marked as disallow: {}. Parsing and cleaning...",
        entries.len()
    );

    let accepted: Vec<String> = entries
        .iter()
        .filter_map(|entry| accept_entry(entry, base_url, mode, collector))
        .collect();

    tracing::debug!("{} new endpoints from {} entries", accepted.len(), entries.len());

    RobotsOutcome::Parsed {
        entries: entries.len(),
        accepted,
    }
}
