//! HTTP-specific error types for the RetailCRM API client.
//!
//! This module contains error types for the dispatch layer: configuration
//! problems detected before sending, transport failures, malformed response
//! bodies, and API-level failures.
//!
//! # Error Handling
//!
//! - [`HttpError::EmptyUrl`]: The target URL is empty; nothing is sent
//! - [`InvalidHttpRequestError`]: A request fails validation before sending
//! - [`HttpError::Network`]: DNS, TLS, connection or timeout failure
//! - [`ResponseParseError`]: The response body is not valid JSON
//! - [`ApiResponseError`]: The API answered with a status of 400 or above
//!
//! No error is retried or absorbed by the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use retailcrm_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) if response.is_successful() => println!("{}", response.body),
//!     Ok(response) => println!("API rejected the call: {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Parse(e)) => println!("Bad body from {}: {}", e.code, e.body),
//!     Err(e) => println!("Request not sent: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a response body cannot be parsed as JSON.
///
/// Carries the status code and the raw body so that callers can still
/// inspect what the server sent.
#[derive(Debug, Error)]
#[error("Failed to parse response body (status {code}): {source}")]
pub struct ResponseParseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Error describing an API response with a status of 400 or above.
///
/// Produced by [`ApiResponse::error_for_status`](crate::clients::ApiResponse::error_for_status).
/// The parsed body is kept for inspection; the client never interprets its
/// business meaning.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::clients::ApiResponseError;
///
/// let error = ApiResponseError {
///     code: 404,
///     body: serde_json::json!({"success": false, "errorMsg": "Not found"}),
/// };
///
/// assert!(error.to_string().contains("404"));
/// assert_eq!(error.error_msg(), Some("Not found"));
/// ```
#[derive(Debug, Error)]
#[error("API request failed with status {code}: {body}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl ApiResponseError {
    /// Returns the `errorMsg` field of the body, if present.
    #[must_use]
    pub fn error_msg(&self) -> Option<&str> {
        self.body.get("errorMsg").and_then(serde_json::Value::as_str)
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request has no path.
    #[error("Cannot send a request without a path.")]
    EmptyPath,

    /// A filter or ids fragment was attached to a request that is not a GET.
    #[error("Query fragments are only allowed on get requests, not on {method}.")]
    UnexpectedFragment {
        /// The HTTP method of the rejected request.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::clients::HttpError;
///
/// let error = HttpError::EmptyUrl;
/// assert!(error.to_string().contains("must not be empty"));
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The target URL is empty. Raised before any network activity.
    #[error("Request URL must not be empty.")]
    EmptyUrl,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error(transparent)]
    Parse(#[from] ResponseParseError),

    /// The API answered with a failure status.
    #[error(transparent)]
    Response(#[from] ApiResponseError),
}
