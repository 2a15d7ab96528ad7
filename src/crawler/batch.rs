//! Batch processing of many targets
//!
//! Up to `concurrency` targets run at once, but reports are handed to the
//! sink in input order, so the output of a batch is the same whatever the
//! concurrency.

use crate::archive::Archive;
use crate::crawler::runner::TargetRunner;
use crate::crawler::transport::Transport;
use crate::output::{EndpointSink, OutputResult, RunStatistics};
use futures::{Stream, StreamExt};

/// Runs every target from `targets` and writes each report to `sink`
///
/// Blank and whitespace-only targets are skipped. Format errors are logged
/// and counted; they never stop the batch.
///
/// # Arguments
///
/// * `runner` - The runner every target goes through
/// * `targets` - Raw target strings, in input order
/// * `concurrency` - Maximum number of targets in flight
/// * `sink` - Where endpoints are written
/// * `separate_targets` - Print a blank diagnostic line after each target
///
/// # Returns
///
/// * `Ok(RunStatistics)` - Every target was processed
/// * `Err(OutputError)` - Writing to the sink failed
pub async fn process_targets<T, A, S, K>(
    runner: &TargetRunner<T, A>,
    targets: S,
    concurrency: usize,
    sink: &mut K,
    separate_targets: bool,
) -> OutputResult<RunStatistics>
where
    T: Transport,
    A: Archive,
    S: Stream<Item = String>,
    K: EndpointSink + ?Sized,
{
    let mut stats = RunStatistics::new();

    let reports = targets
        .filter(|target| futures::future::ready(!target.trim().is_empty()))
        .map(move |target| async move { runner.run(&target).await })
        .buffered(concurrency.max(1));
    futures::pin_mut!(reports);

    while let Some(result) = reports.next().await {
        match result {
            Ok(report) => {
                sink.write_report(&report)?;
                stats.record_report(&report);
            }
            Err(_) => stats.record_format_error(),
        }
        if separate_targets {
            eprintln!();
        }
    }

    sink.finish()?;
    Ok(stats)
}
