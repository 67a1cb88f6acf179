//! Location validation endpoints

use super::{impl_call_setters, QueryInput};
use crate::client::FoxentryClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Location API interface
///
/// Validates, searches, fetches and localizes postal addresses. Queries
/// carry address fields like `street`, `city`, `zip` or `streetWithNumber`.
#[derive(Clone)]
pub struct LocationApi {
    client: FoxentryClient,
    pub(crate) request: ApiRequest,
}

impl LocationApi {
    /// Create a new location API interface
    pub(crate) fn new(client: FoxentryClient) -> Self {
        let request = client.request();
        Self { client, request }
    }

    /// Validate an address
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn validate(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("location/validate", query.into(), "value").await
    }

    /// Search for locations matching the query
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn search(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("location/search", query.into(), "value").await
    }

    /// Get details of a single location
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn get(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("location/get", query.into(), "value").await
    }

    /// Find addresses around given coordinates
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn localize(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("location/localize", query.into(), "value").await
    }
}

impl_call_setters!(LocationApi);
