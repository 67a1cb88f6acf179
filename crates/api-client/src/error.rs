//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// HTTP failures are mapped to one variant per recognized status code via
/// [`ApiError::from_status`]; everything else (invalid arguments, missing
/// call state, transport failures) carries no status code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API rejected the request (HTTP 400)
    #[error("Request was invalid or cannot be processed.")]
    BadRequest,

    /// Missing or invalid credentials (HTTP 401)
    #[error("Unauthorized. Did you set your API key?")]
    Unauthorized,

    /// The account has run out of credits (HTTP 402)
    #[error("Payment is required to access this resource.")]
    PaymentRequired,

    /// Access denied (HTTP 403)
    #[error("Forbidden.")]
    Forbidden,

    /// Unknown resource or endpoint (HTTP 404)
    #[error("Resource or endpoint requested is not found on the server.")]
    NotFound,

    /// Rate or daily limit exceeded (HTTP 429)
    #[error("Too many requests have been made in the given time frame or the daily limit has been reached.")]
    TooManyRequests,

    /// The API failed internally (HTTP 500)
    #[error("Internal server error.")]
    ServerError,

    /// The API is temporarily down (HTTP 503)
    #[error("The server is temporarily unable to handle the request.")]
    ServiceUnavailable,

    /// Any other non-success HTTP status
    #[error("Request exception: {reason}")]
    UnexpectedStatus {
        /// HTTP status code as received
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
    },

    /// The request never produced an HTTP response
    #[error("Exception: {0}")]
    Network(#[from] reqwest::Error),

    /// A caller-supplied value failed local validation
    #[error("{0}")]
    InvalidArgument(String),

    /// The request was not ready to be sent
    #[error("{0}")]
    InvalidState(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Map an HTTP status code to its error variant.
    ///
    /// The mapping is total: recognized statuses get their dedicated
    /// variant, anything else becomes [`ApiError::UnexpectedStatus`]
    /// carrying the status and its reason phrase.
    #[must_use]
    pub fn from_status(status: u16, reason: &str) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::TooManyRequests,
            500 => Self::ServerError,
            503 => Self::ServiceUnavailable,
            _ => Self::UnexpectedStatus {
                status,
                reason: reason.to_string(),
            },
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// The HTTP status code behind this error, or 0 when the error did not
    /// come from an HTTP response.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::PaymentRequired => 402,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::TooManyRequests => 429,
            Self::ServerError => 500,
            Self::ServiceUnavailable => 503,
            Self::UnexpectedStatus { status, .. } => *status,
            Self::Network(_)
            | Self::InvalidArgument(_)
            | Self::InvalidState(_)
            | Self::Json(_)
            | Self::Config(_) => 0,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_exact() {
        let cases: [(u16, &str); 8] = [
            (400, "Request was invalid or cannot be processed."),
            (401, "Unauthorized. Did you set your API key?"),
            (402, "Payment is required to access this resource."),
            (403, "Forbidden."),
            (
                404,
                "Resource or endpoint requested is not found on the server.",
            ),
            (
                429,
                "Too many requests have been made in the given time frame or the daily limit has been reached.",
            ),
            (500, "Internal server error."),
            (
                503,
                "The server is temporarily unable to handle the request.",
            ),
        ];

        for (status, message) in cases {
            let error = ApiError::from_status(status, "ignored");
            assert_eq!(error.status_code(), status);
            assert_eq!(error.to_string(), message);
        }
    }

    #[test]
    fn test_unmapped_status_falls_back() {
        let error = ApiError::from_status(418, "I'm a teapot");
        assert!(matches!(error, ApiError::UnexpectedStatus { .. }));
        assert_eq!(error.status_code(), 418);
        assert_eq!(error.to_string(), "Request exception: I'm a teapot");
    }

    #[test]
    fn test_local_errors_have_no_status() {
        assert_eq!(ApiError::invalid_argument("bad ip").status_code(), 0);
        assert_eq!(ApiError::invalid_state("no key").status_code(), 0);
        assert_eq!(ApiError::config("empty url").status_code(), 0);
    }

    #[test]
    fn test_error_class_helpers() {
        assert!(ApiError::from_status(404, "").is_client_error());
        assert!(!ApiError::from_status(404, "").is_server_error());
        assert!(ApiError::from_status(503, "").is_server_error());
        assert!(ApiError::from_status(418, "teapot").is_client_error());
        assert!(!ApiError::invalid_state("x").is_client_error());
    }
}
