//! Per-call request assembly for endpoint methods.
//!
//! An [`EndpointCall`] collects everything one endpoint invocation sends:
//! path ids, main parameters, the JSON payload and the query fragments. It
//! is created fresh for every call and consumed by
//! [`CrmClient::execute`](crate::clients::CrmClient::execute), so nothing
//! survives from one request to the next.

use std::fmt::Display;

use serde::Serialize;

use crate::clients::rest::CrmError;
use crate::clients::{CallParameters, HttpError, HttpRequest};
use crate::rest::encoding::{encode_custom_fields, encode_filter, encode_ids, CustomFields, Filter};
use crate::rest::path::{build_path, Endpoint};

/// Parameters, payload and fragments for one endpoint invocation.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::rest::{Endpoint, EndpointCall};
///
/// let call = EndpointCall::new(Endpoint::OrdersGet)
///     .path_id("id", "A-100")
///     .param_opt("site", Some("main"));
///
/// let request = call.into_request().unwrap();
/// assert_eq!(request.path, "orders/A-100");
/// assert_eq!(request.query_string(), "site=main");
/// ```
#[derive(Debug, Clone)]
pub struct EndpointCall {
    endpoint: Endpoint,
    path_ids: Vec<(&'static str, String)>,
    params: CallParameters,
    filter: String,
    ids: String,
    uses_custom_fields: bool,
}

impl EndpointCall {
    /// Starts an empty call to `endpoint`.
    #[must_use]
    pub const fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            path_ids: Vec::new(),
            params: CallParameters::new(),
            filter: String::new(),
            ids: String::new(),
            uses_custom_fields: false,
        }
    }

    /// The endpoint this call targets.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Returns `true` if a non-empty custom-field set was attached.
    #[must_use]
    pub const fn uses_custom_fields(&self) -> bool {
        self.uses_custom_fields
    }

    /// The parameters collected so far.
    #[must_use]
    pub const fn params(&self) -> &CallParameters {
        &self.params
    }

    /// Sets a value for a `{name}` placeholder of the path template.
    #[must_use]
    pub fn path_id(mut self, name: &'static str, value: impl Display) -> Self {
        self.path_ids.push((name, value.to_string()));
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Adds a parameter when the value is present.
    #[must_use]
    pub fn param_opt<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.params.insert_opt(name, value);
        self
    }

    /// Merges caller-supplied parameters into the main set.
    #[must_use]
    pub fn merge<I, K, V>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.params.extend(other);
        self
    }

    /// JSON-encodes `value` into the parameter named `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] if `value` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self, CrmError> {
        self.params.insert_json(key, value)?;
        Ok(self)
    }

    /// JSON-encodes `value` into the endpoint's payload parameter.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] if `value` cannot be serialized,
    /// or [`CrmError::MissingField`] if the endpoint takes no payload.
    pub fn payload<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, CrmError> {
        let key = self
            .endpoint
            .path()
            .payload_key
            .ok_or(CrmError::MissingField {
                endpoint: self.endpoint.name(),
                field: "payload",
            })?;
        self.json(key, value)
    }

    /// Appends the encoded filter to the filter fragment.
    #[must_use]
    pub fn filter(mut self, filter: &Filter) -> Self {
        self.filter.push_str(&encode_filter(filter));
        self
    }

    /// Sends `filter` entries as ordinary parameters instead of `filter[...]`
    /// keys. A list becomes one pair per item under the same name, and an
    /// entry replaces any parameter already set under its name.
    #[must_use]
    pub fn plain_filter(mut self, filter: &Filter) -> Self {
        for (name, value) in filter.iter() {
            self.params.insert_all(name, value.values());
        }
        self
    }

    /// Appends the encoded custom fields to the filter fragment.
    #[must_use]
    pub fn custom_fields(mut self, fields: &CustomFields) -> Self {
        if !fields.is_empty() {
            self.uses_custom_fields = true;
            self.filter.push_str(&encode_custom_fields(fields));
        }
        self
    }

    /// Sets the ids fragment.
    #[must_use]
    pub fn ids<T: ToString>(mut self, ids: &[T]) -> Self {
        self.ids = encode_ids(ids);
        self
    }

    /// Resolves the path and turns the call into an [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] if the resulting request is invalid.
    pub fn into_request(self) -> Result<HttpRequest, CrmError> {
        let row = self.endpoint.path();
        let path = build_path(row.template, &self.path_ids);

        let request = HttpRequest::builder(row.http_method, path)
            .params(self.params)
            .filter_fragment(self.filter)
            .ids_fragment(self.ids)
            .build()
            .map_err(HttpError::from)?;

        Ok(request)
    }
}
