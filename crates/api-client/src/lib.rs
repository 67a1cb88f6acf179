//! Client for the Foxentry data validation API
//!
//! This crate provides a typed HTTP client for the Foxentry validation
//! service: company, location, name, email and phone verification.
//!
//! # Features
//!
//! - **Resource facades**: one chainable, single-use facade per validation
//!   domain, so per-call state never leaks between requests
//! - **Typed errors**: every HTTP failure maps to a dedicated error variant
//!   carrying its status code
//! - **Dynamic payloads**: queries, options and results stay generic JSON,
//!   matching the endpoint-dependent response shapes of the API
//! - **Environment-based configuration**: key, host and version can come
//!   from `FOXENTRY_*` environment variables
//!
//! # Example
//!
//! ```rust,no_run
//! use foxentry_api_client::FoxentryClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FoxentryClient::new("api-key")?;
//!
//!     // Validate an email address
//!     let response = client
//!         .email()
//!         .with_options(json!({"validationType": "extended"}))
//!         .validate("info@foxentry.com")
//!         .await?;
//!     println!("valid: {:?}", response.result());
//!
//!     // Search for a company
//!     let response = client
//!         .company()
//!         .search(json!({"name": "Foxentry"}))
//!         .await?;
//!     println!("matches: {:?}", response.result());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;

pub use client::FoxentryClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use response::ApiResponse;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::FoxentryClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        CompanyApi, EmailApi, LocationApi, NameApi, PhoneApi, QueryInput,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::request::{ApiRequest, ClientContext, GeoPoint};
    pub use crate::response::ApiResponse;
}
