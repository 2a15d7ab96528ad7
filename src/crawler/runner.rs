//! Target runner
//!
//! Turns one user-supplied host string into a finished report:
//! - Rejects strings that do not look like a domain
//! - Tries `https://` first and falls back to `http://` only on failure
//! - Optionally hands the target over to the snapshot walker
//!
//! Each target gets its own collector, shared by the live fetch and every
//! snapshot year.

use crate::archive::Archive;
use crate::crawler::fetcher::fetch_robots;
use crate::crawler::snapshots::{snapshot_years, walk_snapshots, WalkSummary};
use crate::crawler::transport::Transport;
use crate::robots::{EndpointCollector, OutputMode};
use crate::TargetError;
use chrono::{Datelike, Utc};

/// Outcome of processing one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// The target as supplied
    pub target: String,

    /// Base URL the target resolved to (the successful candidate, or the
    /// last one attempted when none succeeded)
    pub base_url: String,

    /// Whether the live robots.txt answered with HTTP 200
    pub live_success: bool,

    /// Every accepted endpoint in discovery order
    pub endpoints: Vec<String>,

    /// Snapshot walk record, when the walk ran
    pub walk: Option<WalkSummary>,
}

/// Processes targets one at a time against a transport and an archive
pub struct TargetRunner<T, A> {
    transport: T,
    archive: A,
    mode: OutputMode,
    snapshot_years: Option<Vec<i32>>,
}

impl<T: Transport, A: Archive> TargetRunner<T, A> {
    /// Creates a runner with the snapshot walk disabled
    pub fn new(transport: T, archive: A, mode: OutputMode) -> Self {
        Self {
            transport,
            archive,
            mode,
            snapshot_years: None,
        }
    }

    /// Enables the snapshot walk over the `span` years before the current one
    pub fn with_wayback(self, span: u32) -> Self {
        let current_year = Utc::now().year();
        self.with_snapshot_years(snapshot_years(current_year, span))
    }

    /// Enables the snapshot walk over an explicit ascending year list
    pub fn with_snapshot_years(mut self, years: Vec<i32>) -> Self {
        self.snapshot_years = Some(years);
        self
    }

    /// The output mode endpoints are rendered in
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Processes one target
    ///
    /// # Arguments
    ///
    /// * `raw` - A host (`example.com`) or a URL with an explicit scheme
    ///
    /// # Returns
    ///
    /// * `Ok(TargetReport)` - The target was processed, whether or not any
    ///   fetch succeeded
    /// * `Err(TargetError)` - The target does not look like a domain
    pub async fn run(&self, raw: &str) -> Result<TargetReport, TargetError> {
        let target = raw.trim();
        if target.split('.').count() < 2 {
            tracing::error!("URL format error {}", target);
            return Err(TargetError::Format(target.to_string()));
        }

        let mut collector = EndpointCollector::new();
        let mut base_url = String::new();
        let mut live_success = false;

        for candidate in candidate_urls(target) {
            base_url = strip_trailing_slash(&candidate).to_string();
            let outcome = fetch_robots(
                &self.transport,
                &base_url,
                &base_url,
                &base_url,
                self.mode,
                &mut collector,
            )
            .await;

            if outcome.is_success() {
                live_success = true;
                break;
            }
            tracing::debug!("No robots.txt at {}", base_url);
        }

        let walk = match &self.snapshot_years {
            Some(years) => Some(
                walk_snapshots(
                    &self.transport,
                    &self.archive,
                    &base_url,
                    self.mode,
                    years,
                    &mut collector,
                )
                .await,
            ),
            None => None,
        };

        Ok(TargetReport {
            target: target.to_string(),
            base_url,
            live_success,
            endpoints: collector.into_endpoints(),
            walk,
        })
    }
}

/// Ordered base URLs to try for a target
///
/// A target that already names `http://` or `https://` is used as-is;
/// otherwise https is tried before http.
pub fn candidate_urls(target: &str) -> Vec<String> {
    if has_explicit_scheme(target) {
        vec![target.to_string()]
    } else {
        vec![format!("https://{}", target), format!("http://{}", target)]
    }
}

fn has_explicit_scheme(target: &str) -> bool {
    let lower = target.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Removes a single trailing slash
fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
