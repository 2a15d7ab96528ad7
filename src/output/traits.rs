//! Output sink traits and types
//!
//! This module defines the trait interface for endpoint sinks and the
//! associated error type.

use crate::crawler::TargetReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for endpoint sinks
///
/// A sink receives one report per target, in input order, once that target
/// is fully processed.
pub trait EndpointSink {
    /// Writes every endpoint of a finished target
    fn write_report(&mut self, report: &TargetReport) -> OutputResult<()>;

    /// Flushes anything buffered
    fn finish(&mut self) -> OutputResult<()>;
}
