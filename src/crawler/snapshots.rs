//! Snapshot walker
//!
//! Replays robots.txt extraction against one archived capture per past
//! year, oldest first. Consecutive years that resolve to the same capture
//! are fetched only once. A failing year never stops the walk.

use crate::archive::Archive;
use crate::crawler::fetcher::{fetch_robots, RobotsOutcome};
use crate::crawler::transport::Transport;
use crate::robots::{EndpointCollector, OutputMode};
use crate::state::{WalkState, YearOutcome};
use chrono::{NaiveDate, NaiveDateTime};

/// Years to walk, ascending, ending just before `current_year`
///
/// # Examples
///
/// ```
/// use disallow_miner::crawler::snapshot_years;
///
/// assert_eq!(snapshot_years(2024, 3), vec![2021, 2022, 2023]);
/// ```
pub fn snapshot_years(current_year: i32, span: u32) -> Vec<i32> {
    let span = i32::try_from(span).unwrap_or(i32::MAX);
    (current_year.saturating_sub(span)..current_year).collect()
}

/// January 1 of `year` at midnight
pub fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}

/// Per-year record of a finished walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Each attempted year with its outcome, ascending
    pub years: Vec<(i32, YearOutcome)>,
}

impl WalkSummary {
    /// Number of years whose robots.txt was requested
    pub fn fetched_count(&self) -> usize {
        self.years.iter().filter(|(_, o)| o.was_fetched()).count()
    }

    /// Years skipped because they resolved to the previous capture
    pub fn skipped_years(&self) -> Vec<i32> {
        self.years
            .iter()
            .filter(|(_, o)| matches!(o, YearOutcome::SameSnapshot))
            .map(|(year, _)| *year)
            .collect()
    }

    /// Years whose archive lookup failed
    pub fn failed_lookups(&self) -> Vec<i32> {
        self.years
            .iter()
            .filter(|(_, o)| matches!(o, YearOutcome::LookupFailed { .. }))
            .map(|(year, _)| *year)
            .collect()
    }
}

/// Walks archived captures of `target_url` for each year in `years`
///
/// Endpoints accumulate into the same collector the live fetch used and
/// are composed with `target_url`, not with the archive URL.
///
/// # Arguments
///
/// * `transport` - The transport robots.txt is fetched with
/// * `archive` - The archive captures are resolved through
/// * `target_url` - The live base URL of the target
/// * `mode` - How endpoints are rendered
/// * `years` - Ascending years to query
/// * `collector` - The target's collector
pub async fn walk_snapshots<T, A>(
    transport: &T,
    archive: &A,
    target_url: &str,
    mode: OutputMode,
    years: &[i32],
    collector: &mut EndpointCollector,
) -> WalkSummary
where
    T: Transport + ?Sized,
    A: Archive + ?Sized,
{
    let mut summary = WalkSummary::default();
    let mut last_replay_url: Option<String> = None;
    let mut state = WalkState::start(years);

    while let WalkState::Pending(year) = state {
        tracing::trace!("Snapshot walk for {} is {}", target_url, state);

        let outcome = match resolve_replay_url(archive, target_url, year).await {
            Err(error) => {
                tracing::warn!("[WB {}] {}", year, error);
                YearOutcome::LookupFailed { error }
            }
            Ok(replay_url) if last_replay_url.as_deref() == Some(replay_url.as_str()) => {
                tracing::info!("Skipping year {}. Same snapshot as previous", year);
                YearOutcome::SameSnapshot
            }
            Ok(replay_url) => {
                last_replay_url = Some(replay_url.clone());
                let label = format!("{}. Wayback Machine Year {}", target_url, year);
                match fetch_robots(transport, &replay_url, target_url, &label, mode, collector)
                    .await
                {
                    RobotsOutcome::Parsed { accepted, .. } => YearOutcome::Fetched {
                        replay_url,
                        accepted: accepted.len(),
                    },
                    _ => YearOutcome::FetchFailed { replay_url },
                }
            }
        };

        summary.years.push((year, outcome));
        state = state.advance(years);
    }

    summary
}

/// Looks up the capture for one year and composes its replay URL
async fn resolve_replay_url<A: Archive + ?Sized>(
    archive: &A,
    target_url: &str,
    year: i32,
) -> Result<String, String> {
    let at = year_start(year).ok_or_else(|| format!("Invalid year {}", year))?;
    let capture = archive
        .nearest_capture(target_url, at)
        .await
        .map_err(|e| e.to_string())?;
    Ok(archive.replay_url(target_url, capture.captured_at))
}
