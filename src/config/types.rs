use crate::robots::OutputMode;
use serde::Deserialize;

/// Browser-like agent sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux i686; rv:89.0) Gecko/20100101 Firefox/89.0";

/// Main configuration structure for Disallow-Miner
///
/// Every section and key is optional; missing values fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub wayback: WaybackConfig,
    pub output: OutputConfig,
    pub runner: RunnerConfig,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Accept self-signed and expired certificates
    #[serde(rename = "accept-invalid-certs")]
    pub accept_invalid_certs: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 7,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
        }
    }
}

/// Wayback Machine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WaybackConfig {
    /// Replay extraction against archived snapshots
    pub enabled: bool,

    /// How many past years to walk (the current year is never included)
    pub years: u32,

    /// Base URL of the availability API
    #[serde(rename = "api-url")]
    pub api_url: String,

    /// Base URL snapshots are replayed from
    #[serde(rename = "replay-url")]
    pub replay_url: String,
}

impl Default for WaybackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            years: 5,
            api_url: "https://archive.org".to_string(),
            replay_url: "https://web.archive.org".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `0` for full URLs, anything else for bare paths
    pub mode: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { mode: 1 }
    }
}

impl OutputConfig {
    /// Returns the output mode the numeric flag selects
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flag(self.mode)
    }
}

/// Target processing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Number of targets processed at the same time
    pub concurrency: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}
