//! Company validation endpoints

use super::{impl_call_setters, QueryInput};
use crate::client::FoxentryClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Company API interface
///
/// Validates, searches and fetches company registry data. Queries typically
/// carry fields like `name`, `registrationNumber` or `taxNumber`.
#[derive(Clone)]
pub struct CompanyApi {
    client: FoxentryClient,
    pub(crate) request: ApiRequest,
}

impl CompanyApi {
    /// Create a new company API interface
    pub(crate) fn new(client: FoxentryClient) -> Self {
        let request = client.request();
        Self { client, request }
    }

    /// Validate company identifiers
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn validate(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("company/validate", query.into(), "value").await
    }

    /// Search for companies matching the query
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn search(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("company/search", query.into(), "value").await
    }

    /// Get details of a single company
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn get(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("company/get", query.into(), "value").await
    }
}

impl_call_setters!(CompanyApi);
