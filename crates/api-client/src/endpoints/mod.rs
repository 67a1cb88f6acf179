//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one validation domain.
//!
//! ## Mapping to the Foxentry API
//!
//! | Module | Endpoints | Description |
//! |--------|-----------|-------------|
//! | `company` | `company/validate`, `company/search`, `company/get` | Company registry data |
//! | `location` | `location/validate`, `location/search`, `location/get`, `location/localize` | Postal addresses |
//! | `name` | `name/validate` | Personal names |
//! | `email` | `email/validate`, `email/search` | Email addresses |
//! | `phone` | `phone/validate` | Phone numbers |
//!
//! Facades are single-use values: every accessor on
//! [`FoxentryClient`](crate::client::FoxentryClient) returns a fresh facade
//! with empty per-call state, and the operation consumes it. Options, custom
//! ids and client context therefore never leak from one call into the next.

use serde_json::{Map, Value};

pub mod company;
pub mod email;
pub mod location;
pub mod name;
pub mod phone;

pub use company::CompanyApi;
pub use email::EmailApi;
pub use location::LocationApi;
pub use name::NameApi;
pub use phone::PhoneApi;

/// Caller-supplied query for a validation operation
///
/// Operations accept either a bare string or a JSON object. A bare string is
/// normalized into a single-key object whose key depends on the operation
/// (`{"email": …}` for email validation, `{"value": …}` elsewhere).
#[derive(Debug, Clone)]
pub enum QueryInput {
    /// A bare value, wrapped into a query object by the operation
    Text(String),
    /// An explicit query object, passed through as-is
    Object(Map<String, Value>),
}

impl QueryInput {
    /// Normalize into a query object, wrapping bare text under `text_key`
    pub(crate) fn into_query(self, text_key: &str) -> Map<String, Value> {
        match self {
            Self::Text(value) => {
                let mut query = Map::new();
                query.insert(text_key.to_string(), Value::String(value));
                query
            }
            Self::Object(query) => query,
        }
    }
}

impl From<&str> for QueryInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Map<String, Value>> for QueryInput {
    fn from(query: Map<String, Value>) -> Self {
        Self::Object(query)
    }
}

impl From<Value> for QueryInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(query) => Self::Object(query),
            // Anything else ends up as an empty query, rejected at send time.
            _ => Self::Object(Map::new()),
        }
    }
}

/// Implements the per-call setters and the send plumbing shared by every
/// resource facade. Expects `client` and `request` fields.
macro_rules! impl_call_setters {
    ($api:ident) => {
        impl $api {
            /// Attach a custom identifier to the outgoing request
            #[must_use]
            pub fn with_custom_id(mut self, id: impl Into<String>) -> Self {
                self.request.set_custom_id(id);
                self
            }

            /// Set endpoint-specific options for the outgoing request
            #[must_use]
            pub fn with_options(mut self, options: serde_json::Value) -> Self {
                self.request.set_options(options);
                self
            }

            /// Set the end user's IP address
            ///
            /// # Errors
            /// Returns [`crate::ApiError::InvalidArgument`] if `ip` is not a
            /// valid IPv4 or IPv6 literal.
            pub fn with_client_ip(mut self, ip: &str) -> crate::error::ApiResult<Self> {
                self.request.set_client_ip(ip)?;
                Ok(self)
            }

            /// Set the end user's country (ISO-3166-1 alpha-2)
            ///
            /// # Errors
            /// Returns [`crate::ApiError::InvalidArgument`] unless `country`
            /// is exactly two uppercase ASCII letters.
            pub fn with_client_country(mut self, country: &str) -> crate::error::ApiResult<Self> {
                self.request.set_client_country(country)?;
                Ok(self)
            }

            /// Set the end user's geographic coordinates
            #[must_use]
            pub fn with_client_location(mut self, lat: f64, lon: f64) -> Self {
                self.request.set_client_location(lat, lon);
                self
            }

            /// Toggle the request echo in the API response for this call
            #[must_use]
            pub fn with_include_request_details(mut self, include: bool) -> Self {
                self.request.set_include_request_details(include);
                self
            }

            /// Finish the per-call context and execute the request
            async fn call(
                mut self,
                endpoint: &str,
                query: crate::endpoints::QueryInput,
                text_key: &str,
            ) -> crate::error::ApiResult<crate::response::ApiResponse> {
                self.request.set_endpoint(endpoint);
                self.request.set_query(query.into_query(text_key));
                self.client.execute(self.request).await
            }
        }
    };
}
pub(crate) use impl_call_setters;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FoxentryClient;
    use serde_json::json;

    #[test]
    fn test_text_query_normalization() {
        let query = QueryInput::from("info@foxentry.com").into_query("email");
        assert_eq!(Value::Object(query), json!({"email": "info@foxentry.com"}));
    }

    #[test]
    fn test_object_query_passes_through() {
        let input = QueryInput::from(json!({"name": "Foxentry s.r.o.", "country": "CZ"}));
        let query = input.into_query("value");
        assert_eq!(
            Value::Object(query),
            json!({"name": "Foxentry s.r.o.", "country": "CZ"})
        );
    }

    #[test]
    fn test_json_string_is_treated_as_text() {
        let query = QueryInput::from(json!("+420123456789")).into_query("value");
        assert_eq!(Value::Object(query), json!({"value": "+420123456789"}));
    }

    #[test]
    fn test_non_object_json_becomes_empty_query() {
        let query = QueryInput::from(json!(42)).into_query("value");
        assert!(query.is_empty());
    }

    #[test]
    fn test_calls_do_not_share_state() {
        let client = FoxentryClient::new("test-key").unwrap();

        let first = client
            .email()
            .with_custom_id("order-1")
            .with_options(json!({"validationType": "extended"}));
        let second = client.email();

        let first_body = first.request.body();
        assert_eq!(first_body["request"]["customId"], json!("order-1"));
        assert_eq!(
            first_body["request"]["options"],
            json!({"validationType": "extended"})
        );

        let second_body = second.request.body();
        assert_eq!(second_body["request"]["customId"], json!(null));
        assert_eq!(second_body["request"]["options"], json!(null));
    }

    #[test]
    fn test_setter_chaining() {
        let client = FoxentryClient::new("test-key").unwrap();

        let api = client
            .location()
            .with_client_ip("127.0.0.1")
            .unwrap()
            .with_client_country("CZ")
            .unwrap()
            .with_client_location(50.073, 14.418)
            .with_custom_id("lookup-7");

        let body = api.request.body();
        let context = &body["request"]["client"];
        assert_eq!(context["ip"], json!("127.0.0.1"));
        assert_eq!(context["country"], json!("CZ"));
        assert_eq!(context["location"], json!({"lat": 50.073, "lon": 14.418}));
        assert_eq!(body["request"]["customId"], json!("lookup-7"));
    }

    #[test]
    fn test_invalid_ip_rejected_on_facade() {
        let client = FoxentryClient::new("test-key").unwrap();
        assert!(client.phone().with_client_ip("999.0.0.1").is_err());
        assert!(client.phone().with_client_country("cz").is_err());
    }
}
