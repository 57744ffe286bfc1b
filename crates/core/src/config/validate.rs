use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Search endpoint is a non-empty http(s) URL
/// - Request timeout is not 0
/// - Debounce window is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !config.search.endpoint.starts_with("http://")
        && !config.search.endpoint.starts_with("https://")
    {
        return Err(ConfigError::ValidationError(format!(
            "search.endpoint must be an http(s) URL, got '{}'",
            config.search.endpoint
        )));
    }

    if config.search.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "search.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.pipeline.debounce_ms == 0 {
        return Err(ConfigError::ValidationError(
            "pipeline.debounce_ms cannot be 0".to_string(),
        ));
    }

    Ok(())
}
