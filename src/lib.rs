//! # RetailCRM API Rust Client
//!
//! An async Rust client for the RetailCRM REST API (versions 3 and 5),
//! providing type-safe configuration, query encoding for filters and custom
//! fields, and one method per API operation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CrmConfig`] and [`CrmConfigBuilder`]
//! - Validated newtypes for the API key and the CRM address
//! - API version selection with per-endpoint availability checks
//! - Bracket-style encoding of filters, custom fields and id lists
//! - GET requests with query strings and POST requests with form bodies
//! - A `{code, body}` response envelope for every call
//!
//! ## Quick Start
//!
//! ```rust
//! use retailcrm_api::{ApiKey, ApiVersion, BaseUrl, CrmClient, CrmConfig};
//!
//! // Create configuration using the builder pattern
//! let config = CrmConfig::builder()
//!     .base_url(BaseUrl::new("https://demo.retailcrm.ru").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_version(ApiVersion::V5)
//!     .build()
//!     .unwrap();
//!
//! let client = CrmClient::new(&config);
//! assert_eq!(client.api_version(), ApiVersion::V5);
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use retailcrm_api::rest::{CustomFields, Filter, Pagination};
//! use serde_json::json;
//!
//! let filter = Filter::new()
//!     .with("status", "new")
//!     .with("sites", ["main", "outlet"]);
//! let fields = CustomFields::new().with("size", [("min", 40), ("max", 44)]);
//!
//! let response = client.orders(&filter, Some(&fields), Pagination::new(50, 1)).await?;
//! if response.is_successful() {
//!     println!("{}", response.body["orders"]);
//! }
//!
//! // Turn failure statuses into errors
//! let created = client
//!     .orders_create(&json!({"externalId": "A-100"}), None)
//!     .await?
//!     .error_for_status()?;
//! ```
//!
//! ## Configuration from the Environment
//!
//! ```rust,ignore
//! use retailcrm_api::CrmConfig;
//!
//! // RETAILCRM_URL, RETAILCRM_API_KEY, optional RETAILCRM_API_VERSION
//! // and RETAILCRM_TIMEOUT_SECS
//! let config = CrmConfig::from_env()?;
//! ```
//!
//! ## Logging
//!
//! Requests and responses are logged through `tracing`. The API key is
//! masked in every log line. No subscriber is installed by this crate.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and version checks fail before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiVersion, BaseUrl, CrmConfig, CrmConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponse, ApiResponseError, CallParameters, CrmClient, CrmError, HttpClient, HttpError,
    HttpMethod, HttpRequest, HttpRequestBuilder, InvalidHttpRequestError, ResponseParseError,
};

// Re-export endpoint-layer types
pub use rest::{CustomFields, Endpoint, Filter, HistoryRange, Pagination};
