//! Endpoint-level client for the RetailCRM REST API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that knows about API versions
//! and the endpoint table.
//!
//! # Overview
//!
//! - [`CrmClient`]: The client; endpoint methods are defined in [`crate::rest::resources`]
//! - [`CrmError`]: Error type for endpoint calls
//!
//! # Versioning
//!
//! A client is bound to one API version, taken from
//! [`CrmConfig`](crate::CrmConfig) or given to [`CrmClient::with_version`].
//! Requests go to `{base_url}/api/v{n}/...`. Endpoints newer than the
//! client's version are rejected before dispatch.
//!
//! # Example
//!
//! ```rust,ignore
//! use retailcrm_api::{ApiKey, ApiVersion, BaseUrl, CrmClient, CrmConfig};
//!
//! let config = CrmConfig::builder()
//!     .base_url(BaseUrl::new("https://demo.retailcrm.ru")?)
//!     .api_key(ApiKey::new("my-key")?)
//!     .build()?;
//!
//! let client = CrmClient::with_version(&config, ApiVersion::V3);
//! let response = client.orders_get("A-100", "externalId", None).await?;
//! ```

mod client;
mod errors;

pub use client::CrmClient;
pub use errors::CrmError;
