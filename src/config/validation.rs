use crate::config::types::{Config, HttpConfig, RunnerConfig, WaybackConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_wayback_config(&config.wayback)?;
    validate_runner_config(&config.runner)?;
    Ok(())
}

/// Validates HTTP transport configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates Wayback Machine configuration
fn validate_wayback_config(config: &WaybackConfig) -> Result<(), ConfigError> {
    if config.years < 1 || config.years > 30 {
        return Err(ConfigError::Validation(format!(
            "wayback years must be between 1 and 30, got {}",
            config.years
        )));
    }

    validate_http_url("api_url", &config.api_url)?;
    validate_http_url("replay_url", &config.replay_url)?;

    Ok(())
}

/// Validates target processing configuration
fn validate_runner_config(config: &RunnerConfig) -> Result<(), ConfigError> {
    if config.concurrency < 1 || config.concurrency > 64 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and 64, got {}",
            config.concurrency
        )));
    }

    Ok(())
}

/// Validates that a URL parses and uses http or https
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            field,
            url.scheme()
        )));
    }

    Ok(())
}
