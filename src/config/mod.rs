//! Configuration types for the RetailCRM API client.
//!
//! This module provides the configuration types used to point a client at a
//! CRM instance and authenticate against it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CrmConfig`]: The configuration struct holding credentials and transport settings
//! - [`CrmConfigBuilder`]: A builder for constructing [`CrmConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated CRM address
//! - [`ApiVersion`]: The RetailCRM API generation to use
//!
//! # Example
//!
//! ```rust
//! use retailcrm_api::{CrmConfig, ApiKey, BaseUrl, ApiVersion};
//!
//! let config = CrmConfig::builder()
//!     .base_url(BaseUrl::new("https://demo.retailcrm.ru").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::V5)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the CRM address.
pub const ENV_URL: &str = "RETAILCRM_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "RETAILCRM_API_KEY";
/// Environment variable holding the API version (`v3` or `v5`).
pub const ENV_API_VERSION: &str = "RETAILCRM_API_VERSION";
/// Environment variable holding the request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "RETAILCRM_TIMEOUT_SECS";

/// Configuration for a RetailCRM client.
///
/// The credential pair (base URL and API key) is fixed for the lifetime of
/// every client built from this configuration.
///
/// # Thread Safety
///
/// `CrmConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use retailcrm_api::{CrmConfig, ApiKey, BaseUrl};
///
/// let config = CrmConfig::builder()
///     .base_url(BaseUrl::new("https://demo.retailcrm.ru").unwrap())
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug)]
pub struct CrmConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl CrmConfig {
    /// Creates a new builder for constructing a `CrmConfig`.
    #[must_use]
    pub fn builder() -> CrmConfigBuilder {
        CrmConfigBuilder::new()
    }

    /// Builds a configuration from process environment variables.
    ///
    /// Reads [`ENV_URL`] and [`ENV_API_KEY`] (required) plus
    /// [`ENV_API_VERSION`] and [`ENV_TIMEOUT_SECS`] (optional).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when a required variable is
    /// unset, [`ConfigError::InvalidEnvVar`] when the timeout is not a
    /// number, and the usual validation errors for the values themselves.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// This is the logic behind [`from_env`](Self::from_env), usable with
    /// any key/value source.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingEnvVar { name })
        };

        let mut builder = Self::builder()
            .base_url(BaseUrl::new(required(ENV_URL)?)?)
            .api_key(ApiKey::new(required(ENV_API_KEY)?)?);

        if let Some(version) = lookup(ENV_API_VERSION) {
            builder = builder.api_version(version.parse()?);
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: ENV_TIMEOUT_SECS,
                    value: timeout.clone(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the CRM base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CrmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CrmConfig>();
};

/// Builder for constructing [`CrmConfig`] instances.
///
/// Required fields are `base_url` and `api_key`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `timeout`: `None` (no client-side timeout)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CrmConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl CrmConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CRM base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets a timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CrmConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<CrmConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(CrmConfig {
            base_url,
            api_key,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
