//! Output module for emitting endpoints
//!
//! This module handles:
//! - Writing accepted endpoints one per line, per target, in input order
//! - Mirroring the same lines to a file
//! - Recording run statistics

pub mod stats;
mod traits;
mod writer;

pub use stats::RunStatistics;
pub use traits::{EndpointSink, OutputError, OutputResult};
pub use writer::LineWriter;
