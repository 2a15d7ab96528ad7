//! Robots.txt disallow extraction module
//!
//! This module turns raw robots.txt content into cleaned endpoints. It is
//! split into three parts:
//! - `matcher`: finds every `Disallow:` line in the document
//! - `normalize`: cleans a single entry into an endpoint
//! - `collector`: deduplicates endpoints across all fetches of one target

mod collector;
mod matcher;
mod normalize;

pub use collector::EndpointCollector;
pub use matcher::extract_disallow_entries;
pub use normalize::{accept_entry, normalize_entry};

/// How accepted endpoints are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<base URL>/<path>`, ready to request
    FullUrl,
    /// The cleaned path alone, for wordlists
    #[default]
    BarePath,
}

impl OutputMode {
    /// Maps the numeric mode flag: `0` means full URLs, anything else bare paths
    pub fn from_flag(flag: u32) -> Self {
        if flag == 0 {
            Self::FullUrl
        } else {
            Self::BarePath
        }
    }

    /// Returns the numeric flag for this mode
    pub fn as_flag(&self) -> u32 {
        match self {
            Self::FullUrl => 0,
            Self::BarePath => 1,
        }
    }
}
