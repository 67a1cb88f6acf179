//! Typed accessors over a raw Foxentry API response

use crate::error::ApiResult;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Rate limit headers returned by the API
const RATE_LIMIT: &str = "foxentry-rate-limit";
const RATE_LIMIT_PERIOD: &str = "foxentry-rate-limit-period";
const RATE_LIMIT_REMAINING: &str = "foxentry-rate-limit-remaining";
const DAILY_CREDITS_LEFT: &str = "foxentry-daily-credits-left";
const DAILY_CREDITS_LIMIT: &str = "foxentry-daily-credits-limit";
const API_VERSION: &str = "foxentry-api-version";

/// Immutable wrapper around an API response body and its headers
///
/// Accessors are pure projections over the parsed JSON document: they
/// return `None` when a path is absent or null and never validate the
/// payload, since the response shape varies by endpoint.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    data: Value,
    headers: HeaderMap,
}

impl ApiResponse {
    /// Wrap an already-parsed response body
    #[must_use]
    pub fn new(data: Value, headers: HeaderMap) -> Self {
        Self { data, headers }
    }

    /// Parse a raw JSON body and wrap it
    ///
    /// # Errors
    /// Returns [`crate::ApiError::Json`] if `body` is not valid JSON.
    pub fn from_json(body: &str, headers: HeaderMap) -> ApiResult<Self> {
        let data = serde_json::from_str(body)?;
        Ok(Self { data, headers })
    }

    /// Status code reported inside the response body
    #[must_use]
    pub fn status(&self) -> Option<u64> {
        self.data.get("status").and_then(Value::as_u64)
    }

    /// All response headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Requests allowed per rate limit period
    #[must_use]
    pub fn rate_limit(&self) -> Option<u64> {
        self.header_number(RATE_LIMIT)
    }

    /// Rate limit period in seconds
    #[must_use]
    pub fn rate_limit_period(&self) -> Option<u64> {
        self.header_number(RATE_LIMIT_PERIOD)
    }

    /// Requests remaining in the current period
    #[must_use]
    pub fn rate_limit_remaining(&self) -> Option<u64> {
        self.header_number(RATE_LIMIT_REMAINING)
    }

    /// Credits left for today
    #[must_use]
    pub fn daily_credits_left(&self) -> Option<u64> {
        self.header_number(DAILY_CREDITS_LEFT)
    }

    /// Daily credit limit of the account
    #[must_use]
    pub fn daily_credits_limit(&self) -> Option<u64> {
        self.header_number(DAILY_CREDITS_LIMIT)
    }

    /// API version that served the request
    #[must_use]
    pub fn api_version(&self) -> Option<f64> {
        self.header_str(API_VERSION)?.parse().ok()
    }

    /// Echo of the request, when request details were asked for
    #[must_use]
    pub fn request(&self) -> Option<&Value> {
        self.field("request")
    }

    /// The `response` object of the body
    #[must_use]
    pub fn response(&self) -> Option<&Value> {
        self.field("response")
    }

    /// The validation result
    ///
    /// Prefers the singular `result` field and falls back to the plural
    /// `results` used by search endpoints.
    #[must_use]
    pub fn result(&self) -> Option<&Value> {
        let response = self.response()?;
        non_null(response.get("result")).or_else(|| non_null(response.get("results")))
    }

    /// Corrected variant of the validated value, if the API proposed one
    #[must_use]
    pub fn result_corrected(&self) -> Option<&Value> {
        non_null(self.response()?.get("resultCorrected"))
    }

    /// Suggested alternatives to the validated value
    #[must_use]
    pub fn suggestions(&self) -> Option<&Value> {
        non_null(self.response()?.get("suggestions"))
    }

    /// Errors reported in the response body
    #[must_use]
    pub fn errors(&self) -> Option<&Value> {
        self.field("errors")
    }

    fn field(&self, name: &str) -> Option<&Value> {
        non_null(self.data.get(name))
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    fn header_number(&self, name: &str) -> Option<u64> {
        self.header_str(name)?.parse().ok()
    }
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};
    use serde_json::json;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_result_prefers_singular() {
        let body = json!({"response": {"result": {"a": 1}}});
        let response = ApiResponse::new(body, HeaderMap::new());
        assert_eq!(response.result(), Some(&json!({"a": 1})));
    }

    #[test]
    fn test_result_falls_back_to_plural() {
        let body = json!({"response": {"results": [{"a": 1}]}});
        let response = ApiResponse::new(body, HeaderMap::new());
        assert_eq!(response.result(), Some(&json!([{"a": 1}])));
    }

    #[test]
    fn test_result_absent() {
        let body = json!({"response": {}});
        let response = ApiResponse::new(body, HeaderMap::new());
        assert_eq!(response.result(), None);
    }

    #[test]
    fn test_status_and_errors() {
        let body = json!({
            "status": 200,
            "errors": [{"type": "invalidInput"}],
            "response": {"resultCorrected": {"email": "info@foxentry.com"}}
        });
        let response = ApiResponse::new(body, HeaderMap::new());
        assert_eq!(response.status(), Some(200));
        assert_eq!(response.errors(), Some(&json!([{"type": "invalidInput"}])));
        assert_eq!(
            response.result_corrected(),
            Some(&json!({"email": "info@foxentry.com"}))
        );
        assert_eq!(response.suggestions(), None);
        assert_eq!(response.request(), None);
    }

    #[test]
    fn test_header_accessors() {
        let headers = headers(&[
            ("foxentry-rate-limit", "300"),
            ("foxentry-rate-limit-period", "60"),
            ("foxentry-rate-limit-remaining", "299"),
            ("foxentry-daily-credits-left", "950"),
            ("foxentry-daily-credits-limit", "1000"),
            ("foxentry-api-version", "2.0"),
        ]);
        let response = ApiResponse::new(json!({}), headers);

        assert_eq!(response.rate_limit(), Some(300));
        assert_eq!(response.rate_limit_period(), Some(60));
        assert_eq!(response.rate_limit_remaining(), Some(299));
        assert_eq!(response.daily_credits_left(), Some(950));
        assert_eq!(response.daily_credits_limit(), Some(1000));
        assert_eq!(response.api_version(), Some(2.0));
    }

    #[test]
    fn test_missing_headers_yield_none() {
        let response = ApiResponse::new(json!({}), HeaderMap::new());
        assert_eq!(response.rate_limit(), None);
        assert_eq!(response.api_version(), None);
    }

    #[test]
    fn test_string_and_parsed_bodies_agree() {
        let raw = r#"{
            "status": 200,
            "request": {"query": {"email": "info@foxentry.com"}},
            "response": {"result": {"isValid": true}, "suggestions": []}
        }"#;
        let parsed: Value = serde_json::from_str(raw).unwrap();

        let from_string = ApiResponse::from_json(raw, HeaderMap::new()).unwrap();
        let from_value = ApiResponse::new(parsed, HeaderMap::new());

        assert_eq!(from_string.status(), from_value.status());
        assert_eq!(from_string.request(), from_value.request());
        assert_eq!(from_string.response(), from_value.response());
        assert_eq!(from_string.result(), from_value.result());
        assert_eq!(from_string.suggestions(), from_value.suggestions());
        assert_eq!(from_string.errors(), from_value.errors());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(ApiResponse::from_json("not json", HeaderMap::new()).is_err());
    }
}
