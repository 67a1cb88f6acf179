//! Per-call request context
//!
//! [`ApiRequest`] accumulates everything one outbound call needs: endpoint,
//! query, options, custom id, client context and headers. Each facade
//! operation builds a fresh value from the client configuration, so nothing
//! set for one call can leak into the next.

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::{Map, Value};
use std::net::{IpAddr, Ipv6Addr};
use tracing::{debug, warn};
use uuid::Uuid;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.foxentry.com/";

/// Header toggling the request echo in responses
const INCLUDE_REQUEST_DETAILS: &str = "foxentry-include-request-details";

/// Header selecting the API version
const API_VERSION: &str = "api-version";

/// User agent advertised on every request
const SDK_USER_AGENT: &str = concat!(
    "foxentry-api-client/",
    env!("CARGO_PKG_VERSION"),
    " (ApiReference/2.0)"
);

/// End-user metadata attached to a validation request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientContext {
    /// End user's IP address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// End user's country (ISO-3166-1 alpha-2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// End user's geographic coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// Accumulator for one outbound API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    base_url: String,
    headers: HeaderMap,
    api_key: String,
    endpoint: String,
    custom_id: Option<String>,
    query: Map<String, Value>,
    options: Option<Value>,
    client: Option<ClientContext>,
}

impl Default for ApiRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiRequest {
    /// Create a request context with default headers and base URL
    #[must_use]
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));
        headers.insert(
            HeaderName::from_static(INCLUDE_REQUEST_DETAILS),
            HeaderValue::from_static("false"),
        );

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers,
            api_key: String::new(),
            endpoint: String::new(),
            custom_id: None,
            query: Map::new(),
            options: None,
            client: None,
        }
    }

    /// Store the API key and set the bearer authorization header
    pub fn set_auth(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            self.headers.insert(AUTHORIZATION, value);
        }
    }

    /// Overwrite a header; invalid header names or values are ignored
    pub fn set_header(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
    }

    /// Select the API version served by the remote host
    pub fn set_api_version(&mut self, version: &str) {
        self.set_header(API_VERSION, version);
    }

    /// Toggle the request echo in the API response
    pub fn set_include_request_details(&mut self, include: bool) {
        self.set_header(INCLUDE_REQUEST_DETAILS, if include { "true" } else { "false" });
    }

    /// Attach a custom identifier to the call
    pub fn set_custom_id(&mut self, id: impl Into<String>) {
        self.custom_id = Some(id.into());
    }

    /// Set the query object of the call
    pub fn set_query(&mut self, query: Map<String, Value>) {
        self.query = query;
    }

    /// Set endpoint-specific options
    pub fn set_options(&mut self, options: Value) {
        self.options = Some(options);
    }

    /// Replace the outbound host
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    /// Set the endpoint path, e.g. `email/validate`
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    /// Endpoint path of this call
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Set the end user's IP address
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidArgument`] if `ip` is not a valid IPv4 or
    /// IPv6 literal. Bracketed and zoned IPv6 forms are accepted.
    pub fn set_client_ip(&mut self, ip: &str) -> ApiResult<()> {
        if !is_ip_literal(ip) {
            return Err(ApiError::invalid_argument(
                "The specified IP address is not valid.",
            ));
        }
        self.client_mut().ip = Some(ip.to_string());
        Ok(())
    }

    /// Set the end user's country code
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidArgument`] unless `country` is exactly two
    /// uppercase ASCII letters.
    pub fn set_client_country(&mut self, country: &str) -> ApiResult<()> {
        let valid = country.len() == 2 && country.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(ApiError::invalid_argument(
                "The provided country code does not conform to the ISO-3166-1 alpha-2 format.",
            ));
        }
        self.client_mut().country = Some(country.to_string());
        Ok(())
    }

    /// Set the end user's coordinates, overwriting any prior location
    pub fn set_client_location(&mut self, lat: f64, lon: f64) {
        self.client_mut().location = Some(GeoPoint { lat, lon });
    }

    fn client_mut(&mut self) -> &mut ClientContext {
        self.client.get_or_insert_with(ClientContext::default)
    }

    /// Build the outbound body from the current state
    #[must_use]
    pub fn body(&self) -> Value {
        serde_json::json!({
            "request": {
                "customId": self.custom_id,
                "query": self.query,
                "options": self.options,
                "client": self.client,
            }
        })
    }

    /// Check that the request is ready to be sent
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidState`] naming the missing field when the
    /// API key or endpoint is unset or the query is empty.
    pub fn validate(&self) -> ApiResult<()> {
        if self.api_key.is_empty() {
            return Err(ApiError::invalid_state(
                "API key is required. Please set the API key.",
            ));
        }
        if self.endpoint.is_empty() {
            return Err(ApiError::invalid_state(
                "Endpoint is not set. Please specify the API endpoint.",
            ));
        }
        if self.query.is_empty() {
            return Err(ApiError::invalid_state("Request query is empty."));
        }
        Ok(())
    }

    /// Validate and perform the HTTP call
    ///
    /// A single POST, no retries. Non-2xx statuses are mapped through
    /// [`ApiError::from_status`]; transport failures become
    /// [`ApiError::Network`].
    ///
    /// # Errors
    /// Any of the precondition errors from [`ApiRequest::validate`], or a
    /// mapped transport/HTTP error.
    pub async fn send(&self, http: &reqwest::Client) -> ApiResult<ApiResponse> {
        self.validate()?;

        let request_id = Uuid::new_v4().to_string();
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint
        );

        debug!(
            request_id = %request_id,
            url = %url,
            "Sending request"
        );

        let response = http
            .post(&url)
            .headers(self.headers.clone())
            .json(&self.body())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let headers = response.headers().clone();
            let data = response.json::<Value>().await?;
            debug!(
                request_id = %request_id,
                status = status.as_u16(),
                "Request succeeded"
            );
            Ok(ApiResponse::new(data, headers))
        } else {
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                "Request failed"
            );
            let reason = status
                .canonical_reason()
                .map_or_else(|| status.as_u16().to_string(), str::to_string);
            Err(ApiError::from_status(status.as_u16(), &reason))
        }
    }
}

/// Check whether `raw` is a syntactically valid IPv4 or IPv6 literal.
///
/// Accepts dotted-quad IPv4, colon-hex IPv6, bracketed IPv6 (`[::1]`) and
/// zoned IPv6 (`fe80::1%eth0`).
fn is_ip_literal(raw: &str) -> bool {
    let (inner, bracketed) = if raw.len() > 1 && raw.starts_with('[') && raw.ends_with(']') {
        (&raw[1..raw.len() - 1], true)
    } else {
        (raw, false)
    };

    if let Some((addr, zone)) = inner.split_once('%') {
        return !zone.is_empty() && addr.parse::<Ipv6Addr>().is_ok();
    }

    match inner.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => !bracketed,
        Ok(IpAddr::V6(_)) => true,
        Err(_) => false,
    }
}
