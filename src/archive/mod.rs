//! Web archive lookups
//!
//! The snapshot walker only needs two things from an archive: the capture
//! nearest to a point in time, and the URL that replays a capture. The
//! `Archive` trait captures that boundary; `WaybackArchive` implements it
//! against the Internet Archive.

mod wayback;

pub use wayback::WaybackArchive;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Timestamp layout archives use in URLs and API responses
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Errors that can occur during archive lookups
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive request failed for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Archive returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("No archived capture of {url}")]
    NoCapture { url: String },

    #[error("Invalid capture timestamp: {0}")]
    Timestamp(String),
}

/// A capture resolved by the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveCapture {
    /// Exact time the capture was taken
    pub captured_at: NaiveDateTime,

    /// Replay URL reported by the archive, if any
    pub url: Option<String>,
}

/// A historical web archive
#[async_trait]
pub trait Archive: Send + Sync {
    /// Finds the capture of `url` nearest to `at`
    async fn nearest_capture(
        &self,
        url: &str,
        at: NaiveDateTime,
    ) -> Result<ArchiveCapture, ArchiveError>;

    /// Composes the URL that replays the raw capture of `url` taken at `captured_at`
    fn replay_url(&self, url: &str, captured_at: NaiveDateTime) -> String;
}

/// Formats a timestamp the way archive URLs expect it
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(ARCHIVE_TIMESTAMP_FORMAT).to_string()
}

/// Parses an archive timestamp
///
/// Archives may return shorter timestamps (for example `20200101`); missing
/// trailing fields are padded with zeros.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ArchiveError> {
    if value.is_empty() || value.len() > 14 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArchiveError::Timestamp(value.to_string()));
    }

    let padded = format!("{:0<14}", value);
    NaiveDateTime::parse_from_str(&padded, ARCHIVE_TIMESTAMP_FORMAT)
        .map_err(|e| ArchiveError::Timestamp(format!("{}: {}", value, e)))
}
