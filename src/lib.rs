//! Disallow-Miner: robots.txt endpoint extraction
//!
//! This crate fetches a site's robots.txt, extracts every `Disallow:` path,
//! cleans and deduplicates them, and emits them as full URLs or as bare
//! paths for wordlist generation. It can optionally replay the same
//! extraction against yearly Wayback Machine snapshots of the site.

pub mod archive;
pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod state;

use thiserror::Error;

/// Main error type for Disallow-Miner operations
#[derive(Debug, Error)]
pub enum MinerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors scoped to a single target
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("URL format error {0}")]
    Format(String),
}

/// Result type alias for Disallow-Miner operations
pub type Result<T> = std::result::Result<T, MinerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{TargetReport, TargetRunner};
pub use robots::{EndpointCollector, OutputMode};
