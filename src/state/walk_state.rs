/// Snapshot walk state definitions
///
/// This module defines the states the snapshot walker moves through while
/// replaying robots.txt extraction against archived captures.
use std::fmt;

/// Represents the current position of a snapshot walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkState {
    /// The given year still has to be looked up
    Pending(i32),

    /// Every year in range was attempted
    Done,
}

impl WalkState {
    /// Starts a walk over the given ascending years
    ///
    /// An empty year list starts out as `Done`.
    pub fn start(years: &[i32]) -> Self {
        years.first().copied().map_or(Self::Done, Self::Pending)
    }

    /// Moves to the next year after `year` in the list, or to `Done`
    pub fn advance(self, years: &[i32]) -> Self {
        match self {
            Self::Pending(year) => years
                .iter()
                .copied()
                .find(|&next| next > year)
                .map_or(Self::Done, Self::Pending),
            Self::Done => Self::Done,
        }
    }

    /// Returns true if the walk has finished
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns the pending year, if any
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Pending(year) => Some(*year),
            Self::Done => None,
        }
    }
}

impl fmt::Display for WalkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending(year) => write!(f, "pending-year({})", year),
            Self::Done => write!(f, "done"),
        }
    }
}

/// What happened to a single year of the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearOutcome {
    /// The capture's robots.txt was fetched and parsed
    Fetched {
        /// Replay URL of the capture
        replay_url: String,
        /// Number of new endpoints this year contributed
        accepted: usize,
    },

    /// The capture was fetched but did not answer with HTTP 200
    FetchFailed {
        /// Replay URL of the capture
        replay_url: String,
    },

    /// The archive resolved this year to the previous year's capture
    SameSnapshot,

    /// The archive lookup failed
    LookupFailed {
        /// Error description
        error: String,
    },
}

impl YearOutcome {
    /// Returns true if a robots.txt request was issued for this year
    pub fn was_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. } | Self::FetchFailed { .. })
    }
}
