//! HTTP client for RetailCRM API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into exactly one HTTP exchange and returns the raw
//! status and body, or the wrapped [`ApiResponse`].

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::ApiResponse;
use crate::clients::params::{CallParameters, API_KEY_PARAM};
use crate::config::{ApiKey, CrmConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type of POST bodies.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Longest body excerpt written to warning logs.
const LOG_BODY_LIMIT: usize = 2000;

/// HTTP client for making requests to the RetailCRM API.
///
/// The client handles:
/// - URL construction from the CRM address and the versioned API path
/// - Injecting the `apiKey` parameter into every request
/// - GET requests with parameters and fragments in the query string
/// - POST requests with a form-encoded body
/// - Request and response logging through `tracing`
///
/// It performs no retries. Each call builds its parameter set from the
/// request alone; nothing is stored between calls.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use retailcrm_api::clients::{HttpClient, HttpRequest, HttpMethod};
/// use retailcrm_api::ApiKey;
///
/// let client = HttpClient::new(
///     "https://demo.retailcrm.ru",
///     "/api/v5",
///     ApiKey::new("my-key").unwrap(),
///     None,
/// );
///
/// let request = HttpRequest::builder(HttpMethod::Get, "reference/sites")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://demo.retailcrm.ru`).
    base_uri: String,
    /// Base path (e.g., `/api/v5`).
    base_path: String,
    /// Key sent as the `apiKey` parameter.
    api_key: ApiKey,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_uri` - The CRM address (e.g., `https://demo.retailcrm.ru`)
    /// * `base_path` - The versioned API path (e.g., `/api/v5`)
    /// * `api_key` - The key sent with every request
    /// * `config` - Optional configuration for `timeout` and `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(
        base_uri: impl Into<String>,
        base_path: impl Into<String>,
        api_key: ApiKey,
        config: Option<&CrmConfig>,
    ) -> Self {
        let base_uri = base_uri.into().trim().trim_end_matches('/').to_string();
        let base_path = base_path.into().trim_end_matches('/').to_string();

        let user_agent_prefix = config
            .and_then(CrmConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}RetailCRM API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.and_then(CrmConfig::timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            api_key,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Returns the parameters of `request` with the API key placed first.
    #[must_use]
    pub fn signed_params(&self, request: &HttpRequest) -> CallParameters {
        let mut params = CallParameters::new();
        params.insert(API_KEY_PARAM, self.api_key.as_ref());
        for (name, value) in request.params.iter() {
            if name == API_KEY_PARAM {
                params.insert(name, value);
            } else {
                params.append(name, value);
            }
        }
        params
    }

    /// Sends a request and returns the raw status code and body.
    ///
    /// - GET: parameters are form-encoded into the query string, followed
    ///   by the filter and ids fragments.
    /// - POST: parameters are form-encoded into the request body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The base URI is empty (`EmptyUrl`), before any network activity
    /// - Request validation fails (`InvalidRequest`)
    /// - The exchange fails at the network level (`Network`)
    pub async fn dispatch(&self, request: &HttpRequest) -> Result<(u16, String), HttpError> {
        if self.base_uri.is_empty() {
            return Err(HttpError::EmptyUrl);
        }
        request.verify()?;

        let url = self.url_for(&request.path);
        let signed = HttpRequest {
            params: self.signed_params(request),
            ..request.clone()
        };

        let mut req_builder = match signed.http_method {
            HttpMethod::Get => {
                let query = signed.query_string();
                tracing::info!(
                    "[REQUEST] method: {}; url: {}; params: {}; filter: {}; ids: {}",
                    signed.http_method.as_str(),
                    url,
                    signed.params.redacted(),
                    signed.filter.as_deref().unwrap_or_default(),
                    signed.ids.as_deref().unwrap_or_default()
                );
                self.client.get(format!("{url}?{query}"))
            }
            HttpMethod::Post => {
                tracing::info!(
                    "[REQUEST] method: {}; url: {}; params: {}",
                    signed.http_method.as_str(),
                    url,
                    signed.params.redacted()
                );
                self.client
                    .post(&url)
                    .header("Content-Type", FORM_CONTENT_TYPE)
                    .body(signed.params.to_form_string())
            }
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // reqwest errors carry the request URL, and a GET URL holds the key.
        let res = req_builder
            .send()
            .await
            .map_err(|e| HttpError::Network(e.without_url()))?;
        let code = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| HttpError::Network(e.without_url()))?;

        tracing::info!("[RESPONSE] code: {}; url: {}", code, url);
        tracing::debug!("[RESPONSE] body: {}", body);

        Ok((code, body))
    }

    /// Sends a request and wraps the result in an [`ApiResponse`].
    ///
    /// A status of 400 or above is not an error here; check
    /// [`ApiResponse::is_successful`] or call
    /// [`ApiResponse::error_for_status`].
    ///
    /// # Errors
    ///
    /// Returns everything [`dispatch`](Self::dispatch) returns, plus
    /// `HttpError::Parse` when the body is not valid JSON.
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResponse, HttpError> {
        let (code, body) = self.dispatch(&request).await?;

        ApiResponse::wrap(code, &body).map_err(|e| {
            tracing::warn!(
                "Failed to parse response from {} (status {}): {}",
                request.path,
                code,
                truncate_body(&e.body)
            );
            HttpError::Parse(e)
        })
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client(base_uri: &str) -> HttpClient {
        HttpClient::new(
            base_uri,
            "/api/v5",
            ApiKey::new("test-api-key").unwrap(),
            None,
        )
    }

    #[test]
    fn test_client_construction() {
        let client = create_test_client("https://demo.retailcrm.ru/");

        assert_eq!(client.base_uri(), "https://demo.retailcrm.ru");
        assert_eq!(client.base_path(), "/api/v5");
    }

    #[test]
    fn test_url_for_joins_segments() {
        let client = create_test_client("https://demo.retailcrm.ru");

        assert_eq!(
            client.url_for("orders/statuses"),
            "https://demo.retailcrm.ru/api/v5/orders/statuses"
        );
        assert_eq!(
            client.url_for("/orders"),
            "https://demo.retailcrm.ru/api/v5/orders"
        );
    }

    #[test]
    fn test_signed_params_put_api_key_first() {
        let client = create_test_client("https://demo.retailcrm.ru");
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .param("limit", 50)
            .param("page", 2)
            .build()
            .unwrap();

        let params = client.signed_params(&request);
        assert_eq!(
            params.to_form_string(),
            "apiKey=test-api-key&limit=50&page=2"
        );
        // The request itself is not touched
        assert_eq!(request.params.get(API_KEY_PARAM), None);
    }

    #[test]
    fn test_signed_params_keep_repeated_names() {
        let client = create_test_client("https://demo.retailcrm.ru");
        let mut params = CallParameters::new();
        params.insert_all("types", ["credit", "charge"]);
        let request = HttpRequest::builder(HttpMethod::Get, "loyalty/account/1/bonus/operations")
            .params(params)
            .build()
            .unwrap();

        assert_eq!(
            client.signed_params(&request).to_form_string(),
            "apiKey=test-api-key&types=credit&types=charge"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client("https://demo.retailcrm.ru");

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("RetailCRM API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = CrmConfig::builder()
            .base_url(crate::BaseUrl::new("https://demo.retailcrm.ru").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("MyShop/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(
            config.base_url().as_ref(),
            "/api/v5",
            config.api_key().clone(),
            Some(&config),
        );

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client("https://demo.retailcrm.ru");

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_empty_base_uri_fails_before_sending() {
        let client = create_test_client("");
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .build()
            .unwrap();

        let result = tokio_test::block_on(client.dispatch(&request));
        assert!(matches!(result, Err(HttpError::EmptyUrl)));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");

        let long = "x".repeat(LOG_BODY_LIMIT + 10);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.len(), LOG_BODY_LIMIT + "...[truncated]".len());
    }
}
