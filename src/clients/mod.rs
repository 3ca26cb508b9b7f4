//! HTTP client types for RetailCRM API communication.
//!
//! This module provides the transport layer underneath the endpoint methods:
//! request assembly, dispatch over HTTPS and response wrapping.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Sends one request per call and returns status and body
//! - [`HttpRequest`]: A request with its parameters and query fragments
//! - [`CallParameters`]: Ordered, per-call request parameters
//! - [`ApiResponse`]: The `{code, body}` envelope returned for every call
//! - [`HttpMethod`]: GET or POST
//! - [`rest::CrmClient`]: The endpoint-level client
//! - [`rest::CrmError`]: Endpoint-level error type
//!
//! # Example
//!
//! ```rust,ignore
//! use retailcrm_api::clients::{HttpClient, HttpRequest, HttpMethod};
//! use retailcrm_api::ApiKey;
//!
//! let client = HttpClient::new(
//!     "https://demo.retailcrm.ru",
//!     "/api/v5",
//!     ApiKey::new("my-key").unwrap(),
//!     None,
//! );
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "orders")
//!     .param("limit", 50)
//!     .filter_fragment("filter[status]=new")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Transport failures, malformed bodies and failure statuses all reach
//! the caller unchanged.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod params;
pub mod rest;

pub use errors::{ApiResponseError, HttpError, InvalidHttpRequestError, ResponseParseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::ApiResponse;
pub use params::{CallParameters, API_KEY_PARAM};

pub use rest::{CrmClient, CrmError};
