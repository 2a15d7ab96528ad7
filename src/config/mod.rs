//! Configuration module for Disallow-Miner
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Command-line flags override whatever it sets.
//!
//! # Example
//!
//! ```no_run
//! use disallow_miner::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("miner.toml")).unwrap();
//! println!("Walking {} years of snapshots", config.wayback.years);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, OutputConfig, RunnerConfig, WaybackConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
