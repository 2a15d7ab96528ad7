//! Crawler module for robots.txt fetching and processing
//!
//! This module contains the request side of the tool, including:
//! - The HTTP transport
//! - A single fetch-and-parse round against one root URL
//! - The yearly snapshot walk
//! - Per-target orchestration with scheme fallback
//! - Ordered batch processing of many targets

mod batch;
mod fetcher;
mod runner;
mod snapshots;
mod transport;

pub use batch::process_targets;
pub use fetcher::{fetch_robots, robots_url, RobotsOutcome, ROBOTS_PATH};
pub use runner::{candidate_urls, TargetReport, TargetRunner};
pub use snapshots::{snapshot_years, walk_snapshots, year_start, WalkSummary};
pub use transport::{build_http_client, FetchResponse, HttpTransport, Transport, TransportError};
