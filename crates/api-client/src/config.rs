//! Configuration for the Foxentry API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use crate::request::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default API version requested from the server
const DEFAULT_API_VERSION: &str = "2.0";

/// Client configuration
///
/// Everything here is per-client and immutable once the client is built;
/// per-call state (query, options, custom id, client context) lives on the
/// resource facades instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API host
    pub base_url: String,
    /// API key used for bearer authentication
    pub api_key: Option<String>,
    /// API version sent in the `Api-Version` header
    pub api_version: String,
    /// Whether responses should echo the request details
    pub include_request_details: bool,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            include_request_details: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `FOXENTRY_API_KEY`: API key for bearer authentication
    /// - `FOXENTRY_API_URL`: Base URL of the API host
    /// - `FOXENTRY_API_VERSION`: API version header value
    /// - `FOXENTRY_TIMEOUT_SECS`: Request timeout in seconds
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("FOXENTRY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("FOXENTRY_API_KEY").ok();
        let api_version =
            env::var("FOXENTRY_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let timeout = env::var("FOXENTRY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(Duration::from_secs(30), Duration::from_secs);

        Self {
            base_url,
            api_key,
            api_version,
            include_request_details: false,
            timeout,
        }
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set the API version
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Builder-style method to toggle request details in responses
    #[must_use]
    pub fn with_include_request_details(mut self, include: bool) -> Self {
        self.include_request_details = include;
        self
    }

    /// Builder-style method to set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the base URL is empty or not HTTP,
    /// or the timeout is zero.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.foxentry.com/");
        assert_eq!(config.api_version, "2.0");
        assert!(!config.include_request_details);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/")
            .with_api_key("test-key")
            .with_api_version("2.1")
            .with_include_request_details(true)
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.api_version, "2.1");
        assert!(config.include_request_details);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_validation() {
        let valid = ClientConfig::default();
        assert!(valid.validate().is_ok());

        let empty = ClientConfig::default().with_base_url("");
        assert!(empty.validate().is_err());

        let bad_scheme = ClientConfig::default().with_base_url("ftp://api.foxentry.com/");
        assert!(bad_scheme.validate().is_err());

        let zero_timeout = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(zero_timeout.validate().is_err());
    }
}
