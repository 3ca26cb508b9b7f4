//! Endpoint-level client for the RetailCRM REST API.
//!
//! This module provides the [`CrmClient`] type. The endpoint methods
//! themselves live in [`crate::rest::resources`], grouped by API area.

use crate::clients::rest::CrmError;
use crate::clients::{ApiResponse, HttpClient};
use crate::config::{ApiVersion, CrmConfig};
use crate::rest::EndpointCall;

/// Client for the RetailCRM REST API.
///
/// Holds the transport and the API version. Every endpoint method builds a
/// fresh [`EndpointCall`], checks it against the version and awaits exactly
/// one request.
///
/// # Thread Safety
///
/// `CrmClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use retailcrm_api::{ApiKey, BaseUrl, CrmClient, CrmConfig};
/// use retailcrm_api::rest::{Filter, Pagination};
///
/// let config = CrmConfig::builder()
///     .base_url(BaseUrl::new("https://demo.retailcrm.ru")?)
///     .api_key(ApiKey::new("my-key")?)
///     .build()?;
///
/// let client = CrmClient::new(&config);
///
/// let filter = Filter::new().with("status", "new");
/// let response = client.orders(&filter, None, Pagination::default()).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct CrmClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify CrmClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CrmClient>();
};

impl CrmClient {
    /// Creates a client for the API version in `config`.
    #[must_use]
    pub fn new(config: &CrmConfig) -> Self {
        Self::create_client(config, config.api_version())
    }

    /// Creates a client for an explicit API version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retailcrm_api::{ApiKey, ApiVersion, BaseUrl, CrmClient, CrmConfig};
    ///
    /// let config = CrmConfig::builder()
    ///     .base_url(BaseUrl::new("https://demo.retailcrm.ru").unwrap())
    ///     .api_key(ApiKey::new("my-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = CrmClient::with_version(&config, ApiVersion::V3);
    /// assert_eq!(client.api_version(), ApiVersion::V3);
    /// ```
    #[must_use]
    pub fn with_version(config: &CrmConfig, version: ApiVersion) -> Self {
        let config_version = config.api_version();

        if version == config_version {
            tracing::debug!(
                "CRM client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "CRM client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(config: &CrmConfig, api_version: ApiVersion) -> Self {
        // Construct base path: /api/v{n}
        let base_path = format!("/api/v{}", api_version.number());

        let http_client = HttpClient::new(
            config.base_url().as_ref(),
            base_path,
            config.api_key().clone(),
            Some(config),
        );

        Self {
            http_client,
            api_version,
        }
    }

    /// Returns the API version used by this client.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends one endpoint call.
    ///
    /// Version checks run first, so a rejected call never reaches the
    /// network. Failure statuses come back as an [`ApiResponse`].
    ///
    /// # Errors
    ///
    /// - [`CrmError::UnsupportedEndpoint`] if the endpoint is newer than the client
    /// - [`CrmError::UnsupportedCustomFields`] if custom fields are used below v5
    /// - [`CrmError::Http`] for dispatch, transport and parse failures
    pub async fn execute(&self, call: EndpointCall) -> Result<ApiResponse, CrmError> {
        let endpoint = call.endpoint();

        if !endpoint.is_available_in(self.api_version) {
            return Err(CrmError::UnsupportedEndpoint {
                endpoint: endpoint.name(),
                version: self.api_version,
            });
        }

        if call.uses_custom_fields() && !self.api_version.supports_custom_fields() {
            return Err(CrmError::UnsupportedCustomFields {
                version: self.api_version,
            });
        }

        let request = call.into_request()?;
        self.http_client.request(request).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl};
    use crate::rest::{CustomFields, Endpoint};
    use crate::HttpError;

    fn create_test_config(url: &str) -> CrmConfig {
        CrmConfig::builder()
            .base_url(BaseUrl::new(url).unwrap())
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_config_version() {
        let config = create_test_config("https://demo.retailcrm.ru");
        let client = CrmClient::new(&config);

        assert_eq!(client.api_version(), ApiVersion::V5);
        assert_eq!(client.http_client().base_path(), "/api/v5");
        assert_eq!(client.http_client().base_uri(), "https://demo.retailcrm.ru");
    }

    #[test]
    fn test_with_version_overrides_base_path() {
        let config = create_test_config("https://demo.retailcrm.ru");
        let client = CrmClient::with_version(&config, ApiVersion::V3);

        assert_eq!(client.api_version(), ApiVersion::V3);
        assert_eq!(client.http_client().base_path(), "/api/v3");
    }

    #[test]
    fn test_v5_endpoint_on_v3_client_fails_before_dispatch() {
        // The port is closed; reaching the network would surface a Network error
        let config = create_test_config("http://127.0.0.1:9");
        let client = CrmClient::with_version(&config, ApiVersion::V3);

        let result = tokio_test::block_on(client.execute(EndpointCall::new(Endpoint::LoyaltyAccounts)));
        assert!(matches!(
            result,
            Err(CrmError::UnsupportedEndpoint {
                endpoint: "loyalty_accounts",
                version: ApiVersion::V3
            })
        ));
    }

    #[test]
    fn test_custom_fields_on_v3_client_fail_before_dispatch() {
        let config = create_test_config("http://127.0.0.1:9");
        let client = CrmClient::with_version(&config, ApiVersion::V3);

        let call = EndpointCall::new(Endpoint::Orders)
            .custom_fields(&CustomFields::new().with("size", 42));
        let result = tokio_test::block_on(client.execute(call));
        assert!(matches!(
            result,
            Err(CrmError::UnsupportedCustomFields {
                version: ApiVersion::V3
            })
        ));
    }

    #[test]
    fn test_invalid_request_surfaces_as_http_error() {
        let config = create_test_config("http://127.0.0.1:9");
        let client = CrmClient::new(&config);

        let call = EndpointCall::new(Endpoint::OrdersCreate).ids(&[1]);
        let result = tokio_test::block_on(client.execute(call));
        assert!(matches!(
            result,
            Err(CrmError::Http(HttpError::InvalidRequest(_)))
        ));
    }
}
