//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{CompanyApi, EmailApi, LocationApi, NameApi, PhoneApi};
use crate::error::{ApiError, ApiResult};
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use std::sync::Arc;
use tracing::instrument;

/// Foxentry API client
///
/// Thin entry point over the validation endpoints. The client holds one
/// `reqwest` client plus immutable configuration; every resource accessor
/// returns a facade with its own per-call state, so one client can be shared
/// freely across tasks.
#[derive(Clone)]
pub struct FoxentryClient {
    inner: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl FoxentryClient {
    /// Create a client for the production API with the given key
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] for an invalid configuration or a
    /// transport error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::default().with_api_key(api_key))
    }

    /// Create a client from environment variables
    ///
    /// # Errors
    /// Same failure modes as [`FoxentryClient::with_config`].
    pub fn from_env() -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a client with specific configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the configuration fails validation,
    /// or [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Resource accessors
    // -------------------------------------------------------------------------

    /// Access company validation endpoints
    #[must_use]
    pub fn company(&self) -> CompanyApi {
        CompanyApi::new(self.clone())
    }

    /// Access location validation endpoints
    #[must_use]
    pub fn location(&self) -> LocationApi {
        LocationApi::new(self.clone())
    }

    /// Access name validation endpoints
    #[must_use]
    pub fn name(&self) -> NameApi {
        NameApi::new(self.clone())
    }

    /// Access email validation endpoints
    #[must_use]
    pub fn email(&self) -> EmailApi {
        EmailApi::new(self.clone())
    }

    /// Access phone validation endpoints
    #[must_use]
    pub fn phone(&self) -> PhoneApi {
        PhoneApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Internal plumbing
    // -------------------------------------------------------------------------

    /// Seed a per-call request context from the client configuration
    pub(crate) fn request(&self) -> ApiRequest {
        let mut request = ApiRequest::new();
        request.set_base_url(self.config.base_url.clone());
        request.set_api_version(&self.config.api_version);
        request.set_include_request_details(self.config.include_request_details);
        if let Some(ref key) = self.config.api_key {
            request.set_auth(key.clone());
        }
        request
    }

    /// Execute one prepared request
    #[instrument(skip_all, fields(endpoint = %request.endpoint()))]
    pub(crate) async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        request.send(&self.inner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = FoxentryClient::new("test-key");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.foxentry.com/");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("not-a-url");
        assert!(FoxentryClient::with_config(config).is_err());
    }

    #[test]
    fn test_request_carries_config() {
        let config = ClientConfig::default()
            .with_api_key("test-key")
            .with_api_version("2.1")
            .with_include_request_details(true);
        let client = FoxentryClient::with_config(config).unwrap();

        let mut request = client.request();
        request.set_endpoint("email/validate");
        let mut query = serde_json::Map::new();
        query.insert("email".to_string(), json!("info@foxentry.com"));
        request.set_query(query);

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_without_key_is_not_sendable() {
        let client = FoxentryClient::with_config(ClientConfig::default()).unwrap();

        let mut request = client.request();
        request.set_endpoint("email/validate");
        let mut query = serde_json::Map::new();
        query.insert("email".to_string(), json!("info@foxentry.com"));
        request.set_query(query);

        assert!(request.validate().is_err());
    }
}
