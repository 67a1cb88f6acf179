//! Email validation endpoints

use super::{impl_call_setters, QueryInput};
use crate::client::FoxentryClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Email API interface
///
/// Validates and searches email addresses. A bare string passed to
/// [`EmailApi::validate`] is sent as `{"email": …}`; one passed to
/// [`EmailApi::search`] is sent as `{"value": …}`.
#[derive(Clone)]
pub struct EmailApi {
    client: FoxentryClient,
    pub(crate) request: ApiRequest,
}

impl EmailApi {
    /// Create a new email API interface
    pub(crate) fn new(client: FoxentryClient) -> Self {
        let request = client.request();
        Self { client, request }
    }

    /// Validate an email address
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn validate(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("email/validate", query.into(), "email").await
    }

    /// Search for information related to an email address
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn search(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("email/search", query.into(), "value").await
    }
}

impl_call_setters!(EmailApi);
