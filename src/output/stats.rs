//! Run statistics
//!
//! Tallies per-target outcomes over a whole run and logs a short summary
//! at the end. The summary goes through tracing, never to stdout.

use crate::crawler::TargetReport;

/// Run statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Targets that passed the format check
    pub targets: u64,

    /// Targets rejected by the format check
    pub format_errors: u64,

    /// Targets whose live robots.txt answered with HTTP 200
    pub live_successes: u64,

    /// Snapshot robots.txt requests issued
    pub snapshots_fetched: u64,

    /// Snapshot years skipped as duplicates of the previous year
    pub snapshots_skipped: u64,

    /// Endpoints emitted
    pub endpoints: u64,
}

impl RunStatistics {
    /// Creates empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a processed target
    pub fn record_report(&mut self, report: &TargetReport) {
        self.targets += 1;
        if report.live_success {
            self.live_successes += 1;
        }
        if let Some(walk) = &report.walk {
            self.snapshots_fetched += walk.fetched_count() as u64;
            self.snapshots_skipped += walk.skipped_years().len() as u64;
        }
        self.endpoints += report.endpoints.len() as u64;
    }

    /// Records a target rejected by the format check
    pub fn record_format_error(&mut self) {
        self.format_errors += 1;
    }

    /// Logs the summary at info level
    pub fn log_summary(&self) {
        tracing::info!(
            "Targets: {} ({} rejected), live robots.txt found: {}",
            self.targets,
            self.format_errors,
            self.live_successes
        );
        if self.snapshots_fetched > 0 || self.snapshots_skipped > 0 {
            tracing::info!(
                "Snapshots fetched: {}, skipped as duplicates: {}",
                self.snapshots_fetched,
                self.snapshots_skipped
            );
        }
        tracing::info!("Endpoints emitted: {}", self.endpoints);
    }
}
