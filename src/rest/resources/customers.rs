//! Customer endpoints.

use std::fmt::Display;

use serde::Serialize;

use super::BY_EXTERNAL_ID;
use crate::clients::rest::{CrmClient, CrmError};
use crate::clients::ApiResponse;
use crate::rest::{CustomFields, Endpoint, EndpointCall, Filter, Pagination};

impl CrmClient {
    /// Lists customers matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedCustomFields`] if non-empty
    /// `custom_fields` are passed to a v3 client, or [`CrmError::Http`].
    pub async fn customers(
        &self,
        filter: &Filter,
        custom_fields: Option<&CustomFields>,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        let mut call = EndpointCall::new(Endpoint::Customers)
            .param("limit", pagination.limit)
            .param("page", pagination.page)
            .filter(filter);
        if let Some(fields) = custom_fields {
            call = call.custom_fields(fields);
        }

        self.execute(call).await
    }

    /// Fetches one customer. `by` is sent only when it is not `"externalId"`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn customers_get(
        &self,
        id: impl Display + Send,
        by: &str,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::CustomersGet)
            .path_id("id", id)
            .param_opt("site", site)
            .param_opt("by", (by != BY_EXTERNAL_ID).then_some(by));

        self.execute(call).await
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] or [`CrmError::Http`].
    pub async fn customers_create<T: Serialize + ?Sized + Sync>(
        &self,
        customer: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::CustomersCreate)
            .payload(customer)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Edits a customer. `by` is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] or [`CrmError::Http`].
    pub async fn customers_edit<T: Serialize + ?Sized + Sync>(
        &self,
        id: impl Display + Send,
        customer: &T,
        by: &str,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::CustomersEdit)
            .path_id("id", id)
            .param("by", by)
            .payload(customer)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Creates customers in bulk.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] or [`CrmError::Http`].
    pub async fn customers_upload<T: Serialize + ?Sized + Sync>(
        &self,
        customers: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::CustomersUpload)
            .payload(customers)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Binds external ids to existing customers.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] or [`CrmError::Http`].
    pub async fn customers_fix_external_ids<T: Serialize + ?Sized + Sync>(
        &self,
        customers: &T,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::CustomersFixExternalIds).payload(customers)?;
        self.execute(call).await
    }
}
