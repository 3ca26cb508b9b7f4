//! HTTP request types for the RetailCRM API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! carries three separate pieces of data:
//!
//! - the main [`CallParameters`], form-encoded into the query string (GET)
//!   or the request body (POST);
//! - an optional filter fragment, already flattened to `filter[...]=...`;
//! - an optional ids fragment, already flattened to `ids[]=...`.
//!
//! The fragments are appended to the query string as they are and are only
//! valid on GET requests.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::params::CallParameters;

/// HTTP methods used by the RetailCRM API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET: parameters and fragments go into the query string.
    Get,
    /// HTTP POST: parameters go into a form-encoded body.
    Post,
}

impl HttpMethod {
    /// Returns the uppercase method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A request to be sent to the RetailCRM API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "orders")
///     .param("limit", 50)
///     .param("page", 2)
///     .filter_fragment("filter[status]=new")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query_string(), "limit=50&page=2&filter[status]=new");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the API root) for this request.
    pub path: String,
    /// Form-encoded parameters.
    pub params: CallParameters,
    /// Pre-encoded `filter[...]` fragment.
    pub filter: Option<String>,
    /// Pre-encoded `ids[]` fragment.
    pub ids: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Post` and a filter or ids fragment is set
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.http_method == HttpMethod::Post && (self.filter.is_some() || self.ids.is_some()) {
            return Err(InvalidHttpRequestError::UnexpectedFragment {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the form-encoded parameters followed by the non-empty
    /// fragments, all joined by `&`.
    ///
    /// Fragments are appended verbatim. A fragment that already starts with
    /// `&` (the custom-field encoder emits one) is not given a second one.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = self.params.to_form_string();

        for fragment in [&self.filter, &self.ids].into_iter().flatten() {
            let fragment = fragment.trim_start_matches('&');
            if fragment.is_empty() {
                continue;
            }
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(fragment);
        }

        query
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    params: CallParameters,
    filter: Option<String>,
    ids: Option<String>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            params: CallParameters::new(),
            filter: None,
            ids: None,
        }
    }

    /// Replaces all parameters at once.
    #[must_use]
    pub fn params(mut self, params: CallParameters) -> Self {
        self.params = params;
        self
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Adds a parameter when the value is present.
    #[must_use]
    pub fn param_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.params.insert_opt(key, value);
        self
    }

    /// Sets the pre-encoded filter fragment. Empty fragments are dropped.
    #[must_use]
    pub fn filter_fragment(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.filter = (!fragment.is_empty()).then_some(fragment);
        self
    }

    /// Sets the pre-encoded ids fragment. Empty fragments are dropped.
    #[must_use]
    pub fn ids_fragment(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.ids = (!fragment.is_empty()).then_some(fragment);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            params: self.params,
            filter: self.filter,
            ids: self.ids,
        };
        request.verify()?;
        Ok(request)
    }
}
