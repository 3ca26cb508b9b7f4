//! Endpoint-level error types for the RetailCRM API client.
//!
//! - [`CrmError::UnsupportedEndpoint`]: the endpoint is newer than the client's API version
//! - [`CrmError::UnsupportedCustomFields`]: custom-field filters on a v3 client
//! - [`CrmError::MissingField`]: an edit payload lacks the field its path is built from
//! - [`CrmError::Serialization`]: a business object could not be JSON-encoded
//! - [`CrmError::Http`]: wraps dispatcher errors
//!
//! All checks except `Http` run before any network activity.
//!
//! # Example
//!
//! ```rust,ignore
//! use retailcrm_api::{CrmError, HttpError};
//!
//! match client.loyalty_accounts(&filter, Pagination::default()).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(CrmError::UnsupportedEndpoint { endpoint, version }) => {
//!         println!("{endpoint} needs a newer API than {version}");
//!     }
//!     Err(CrmError::Http(HttpError::Network(e))) => println!("network: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::config::ApiVersion;
use thiserror::Error;

/// Error type for endpoint calls.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::{ApiVersion, CrmError};
///
/// let error = CrmError::UnsupportedEndpoint {
///     endpoint: "loyalty_accounts",
///     version: ApiVersion::V3,
/// };
/// assert_eq!(error.to_string(), "Endpoint loyalty_accounts is not available in API v3");
/// ```
#[derive(Debug, Error)]
pub enum CrmError {
    /// The endpoint is not served by the client's API version.
    #[error("Endpoint {endpoint} is not available in API {version}")]
    UnsupportedEndpoint {
        /// The operation name.
        endpoint: &'static str,
        /// The client's API version.
        version: ApiVersion,
    },

    /// Custom-field filters were passed to a client whose version lacks them.
    #[error("Custom field filters are not available in API {version}")]
    UnsupportedCustomFields {
        /// The client's API version.
        version: ApiVersion,
    },

    /// A required field is missing from the payload.
    #[error("Endpoint {endpoint} requires a '{field}' field")]
    MissingField {
        /// The operation name.
        endpoint: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// A business object could not be serialized.
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ApiResponseError, InvalidHttpRequestError};

    #[test]
    fn test_unsupported_custom_fields_message() {
        let error = CrmError::UnsupportedCustomFields {
            version: ApiVersion::V3,
        };
        assert_eq!(
            error.to_string(),
            "Custom field filters are not available in API v3"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let error = CrmError::MissingField {
            endpoint: "sites_edit",
            field: "code",
        };
        assert_eq!(error.to_string(), "Endpoint sites_edit requires a 'code' field");
    }

    #[test]
    fn test_http_error_is_transparent() {
        let http_error = HttpError::EmptyUrl;
        let message = http_error.to_string();
        let error: CrmError = http_error.into();
        assert_eq!(error.to_string(), message);
    }

    #[test]
    fn test_from_invalid_request_via_http_error() {
        let error: CrmError = HttpError::from(InvalidHttpRequestError::EmptyPath).into();
        assert!(matches!(
            error,
            CrmError::Http(HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath))
        ));
    }

    #[test]
    fn test_api_response_error_nests_under_http() {
        let error: CrmError = HttpError::from(ApiResponseError {
            code: 404,
            body: serde_json::json!({"errorMsg": "Not found"}),
        })
        .into();
        assert!(matches!(error, CrmError::Http(HttpError::Response(ref e)) if e.code == 404));
    }

    #[test]
    fn test_crm_error_implements_std_error() {
        let error: &dyn std::error::Error = &CrmError::UnsupportedCustomFields {
            version: ApiVersion::V3,
        };
        let _ = error;
    }
}
