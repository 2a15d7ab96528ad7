//! State module for tracking snapshot walks
//!
//! # Components
//!
//! - `WalkState`: Position of the walker (pending year or done)
//! - `YearOutcome`: What happened to each year that was attempted

mod walk_state;

// Re-export main types
pub use walk_state::{WalkState, YearOutcome};
