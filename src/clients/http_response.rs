//! HTTP response envelope for the RetailCRM API client.
//!
//! Every dispatched call yields an [`ApiResponse`], whatever its status. The
//! envelope only classifies the status and holds the parsed body; what the
//! body means is left to the caller.

use crate::clients::errors::{ApiResponseError, ResponseParseError};

/// The wrapped result of an API call.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::clients::ApiResponse;
///
/// let response = ApiResponse::wrap(200, r#"{"success":true,"orders":[]}"#).unwrap();
/// assert!(response.is_successful());
/// assert_eq!(response.body["success"], true);
///
/// let empty = ApiResponse::wrap(201, "").unwrap();
/// assert_eq!(empty.body, serde_json::json!([]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The parsed response body, or an empty array for an empty body.
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Wraps a raw status and body.
    ///
    /// An empty body becomes an empty JSON array. Anything else must be
    /// valid JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseParseError`] if the body is not empty and not valid
    /// JSON. The error keeps the status and the raw body.
    pub fn wrap(code: u16, raw_body: &str) -> Result<Self, ResponseParseError> {
        let body = if raw_body.is_empty() {
            serde_json::Value::Array(Vec::new())
        } else {
            serde_json::from_str(raw_body).map_err(|source| ResponseParseError {
                code,
                body: raw_body.to_string(),
                source,
            })?
        };

        Ok(Self { code, body })
    }

    /// Returns `true` if the status code is below 400.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.code < 400
    }

    /// Returns the response unchanged when successful, or an
    /// [`ApiResponseError`] carrying the status and body otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiResponseError`] if the status code is 400 or above.
    pub fn error_for_status(self) -> Result<Self, ApiResponseError> {
        if self.is_successful() {
            Ok(self)
        } else {
            Err(ApiResponseError {
                code: self.code,
                body: self.body,
            })
        }
    }

    /// Returns a top-level field of the body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.body.get(key)
    }

    /// Consumes the envelope and returns the body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
