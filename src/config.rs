//! Run configuration for the batch driver.
//!
//! `BatchSettings` is constructed once, before the loop starts, and stays
//! constant for the lifetime of a run. The post-call delay and the
//! iteration limit are explicit fields rather than literals inside the
//! orchestrator, which keeps the throttle contract testable.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default remote generation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://model.api.baseten.co/production/predict";

/// Default post-call delay honoring the remote per-minute request ceiling.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(60);

/// Default timeout for a single generation call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    /// API credential for the generation endpoint.
    pub api_key: String,
    /// Remote generation endpoint URL.
    pub endpoint: String,
    /// Path to the cached chunk blob produced by the upstream chunker.
    pub batch_cache_path: PathBuf,
    /// Append-only main result log.
    pub result_path: PathBuf,
    /// Directory receiving quarantined responses. Must already exist.
    pub quality_control_dir: PathBuf,
    /// Log file for run events.
    pub log_path: PathBuf,
    /// Unconditional delay after each generation call.
    pub request_delay: Duration,
    /// Timeout for a single generation call.
    pub request_timeout: Duration,
    /// Optional cap on the number of chunks processed this run.
    pub max_chunks: Option<usize>,
}

impl BatchSettings {
    /// Creates settings with default paths and timing for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            batch_cache_path: PathBuf::from("container/batches/batch-0.cache"),
            result_path: PathBuf::from("container/batch-01.jsonl"),
            quality_control_dir: PathBuf::from("container/archives"),
            log_path: PathBuf::from("container/logs/primary.log"),
            request_delay: DEFAULT_REQUEST_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_chunks: None,
        }
    }

    /// Builder method to set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder method to set the batch cache path.
    pub fn with_batch_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.batch_cache_path = path.into();
        self
    }

    /// Builder method to set the main result log path.
    pub fn with_result_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.result_path = path.into();
        self
    }

    /// Builder method to set the quality-control directory.
    pub fn with_quality_control_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.quality_control_dir = path.into();
        self
    }

    /// Builder method to set the log file path.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Builder method to set the post-call delay.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Builder method to set the generation call timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builder method to set the chunk limit.
    pub fn with_max_chunks(mut self, max: Option<usize>) -> Self {
        self.max_chunks = max;
        self
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if any values are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "api_key cannot be empty".to_string(),
            ));
        }

        if self.endpoint.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "endpoint cannot be empty".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ValidationFailed(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_chunks == Some(0) {
            return Err(ConfigError::ValidationFailed(
                "max_chunks must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BatchSettings::new("test-key");
        assert_eq!(settings.api_key, "test-key");
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.request_delay, Duration::from_secs(60));
        assert_eq!(settings.request_timeout, Duration::from_secs(120));
        assert!(settings.max_chunks.is_none());
    }

    #[test]
    fn test_settings_builder() {
        let settings = BatchSettings::new("test-key")
            .with_endpoint("https://example.test/predict")
            .with_batch_cache_path("cache/batch.cache")
            .with_result_path("out/results.jsonl")
            .with_quality_control_dir("out/archives")
            .with_log_path("out/run.log")
            .with_request_delay(Duration::from_secs(30))
            .with_request_timeout(Duration::from_secs(10))
            .with_max_chunks(Some(5));

        assert_eq!(settings.endpoint, "https://example.test/predict");
        assert_eq!(settings.batch_cache_path, PathBuf::from("cache/batch.cache"));
        assert_eq!(settings.result_path, PathBuf::from("out/results.jsonl"));
        assert_eq!(
            settings.quality_control_dir,
            PathBuf::from("out/archives")
        );
        assert_eq!(settings.log_path, PathBuf::from("out/run.log"));
        assert_eq!(settings.request_delay, Duration::from_secs(30));
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.max_chunks, Some(5));
    }

    #[test]
    fn test_validation_valid_settings() {
        let settings = BatchSettings::new("test-key");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_api_key() {
        let settings = BatchSettings::new("");
        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api_key"));
    }

    #[test]
    fn test_validation_empty_endpoint() {
        let settings = BatchSettings::new("test-key").with_endpoint("");
        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let settings = BatchSettings::new("test-key").with_request_timeout(Duration::ZERO);
        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("request_timeout"));
    }

    #[test]
    fn test_validation_zero_max_chunks() {
        let settings = BatchSettings::new("test-key").with_max_chunks(Some(0));
        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_chunks"));
    }
}
