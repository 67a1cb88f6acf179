//! Phone validation endpoints

use super::{impl_call_setters, QueryInput};
use crate::client::FoxentryClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Phone API interface
///
/// Validates phone numbers. Queries carry `numberWithPrefix` or a `number`
/// plus `prefix` pair; a bare string is sent as `{"value": …}`.
#[derive(Clone)]
pub struct PhoneApi {
    client: FoxentryClient,
    pub(crate) request: ApiRequest,
}

impl PhoneApi {
    /// Create a new phone API interface
    pub(crate) fn new(client: FoxentryClient) -> Self {
        let request = client.request();
        Self { client, request }
    }

    /// Validate a phone number
    ///
    /// # Errors
    /// Precondition errors from the request context, or a mapped
    /// transport/HTTP error.
    pub async fn validate(self, query: impl Into<QueryInput>) -> ApiResult<ApiResponse> {
        self.call("phone/validate", query.into(), "value").await
    }
}

impl_call_setters!(PhoneApi);
