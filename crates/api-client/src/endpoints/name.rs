//! Name validation endpoints

use super::{impl_call_setters, QueryInput};
use crate::client::FoxentryClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Name API interface
///
/// Validates personal names and surnames. Queries carry `name`, `surname`
/// or `nameSurname` fields; a bare string is sent as `{"value": …}`.
#[derive(Clone)]
pub struct NameApi {
    client: FoxentryClient,
    pub(crate) request: ApiRequest,
}

impl NameApi {
    /// Create a new name API interface
    pub(crate) fn new(client: FoxentryClient) -> Self {
        let request = client.request();
        Self { client, request }
    }

    /// Validate a personal name
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn validate(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("name/validate", query.into(), "value").await
    }
}

impl_call_setters!(NameApi);
