//! Wayback Machine availability API client
//!
//! Resolves the nearest capture through `/wayback/available` and replays
//! captures through `/web/<timestamp>if_/<url>`, which serves the archived
//! bytes without the archive's navigation toolbar.

use crate::archive::{format_timestamp, parse_timestamp, Archive, ArchiveCapture, ArchiveError};
use crate::config::WaybackConfig;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

/// Availability API response body
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    #[serde(default)]
    archived_snapshots: ArchivedSnapshots,
}

#[derive(Debug, Default, Deserialize)]
struct ArchivedSnapshots {
    closest: Option<ClosestSnapshot>,
}

#[derive(Debug, Deserialize)]
struct ClosestSnapshot {
    #[serde(default = "default_available")]
    available: bool,
    url: Option<String>,
    timestamp: String,
}

fn default_available() -> bool {
    true
}

/// Archive backed by the Internet Archive Wayback Machine
#[derive(Debug, Clone)]
pub struct WaybackArchive {
    client: Client,
    api_url: String,
    replay_url: String,
}

impl WaybackArchive {
    /// Creates an archive client
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client used for availability lookups
    /// * `api_url` - Base URL of the availability API
    /// * `replay_url` - Base URL captures are replayed from
    pub fn new(client: Client, api_url: &str, replay_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            replay_url: replay_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates an archive client from Wayback configuration
    pub fn from_config(client: Client, config: &WaybackConfig) -> Self {
        Self::new(client, &config.api_url, &config.replay_url)
    }

    fn availability_endpoint(&self) -> String {
        format!("{}/wayback/available", self.api_url)
    }
}

#[async_trait]
impl Archive for WaybackArchive {
    async fn nearest_capture(
        &self,
        url: &str,
        at: NaiveDateTime,
    ) -> Result<ArchiveCapture, ArchiveError> {
        let endpoint = self.availability_endpoint();
        let timestamp = format_timestamp(at);
        tracing::debug!("Querying Wayback availability for {} at {}", url, timestamp);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("url", url), ("timestamp", timestamp.as_str())])
            .send()
            .await
            .map_err(|source| ArchiveError::Http {
                url: endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ArchiveError::Status {
                url: endpoint,
                status: response.status().as_u16(),
            });
        }

        let body: AvailabilityResponse =
            response.json().await.map_err(|source| ArchiveError::Http {
                url: endpoint.clone(),
                source,
            })?;

        let closest = body
            .archived_snapshots
            .closest
            .filter(|snapshot| snapshot.available)
            .ok_or_else(|| ArchiveError::NoCapture {
                url: url.to_string(),
            })?;

        Ok(ArchiveCapture {
            captured_at: parse_timestamp(&closest.timestamp)?,
            url: closest.url,
        })
    }

    fn replay_url(&self, url: &str, captured_at: NaiveDateTime) -> String {
        format!(
            "{}/web/{}if_/{}",
            self.replay_url,
            format_timestamp(captured_at),
            url
        )
    }
}
