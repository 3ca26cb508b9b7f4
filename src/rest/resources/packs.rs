//! Order pack endpoints.
//!
//! A pack is a shipment of order items from one store. `packs_edit` reads
//! the pack id from the payload itself:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! client.packs_edit(&json!({"id": 17, "quantity": 2}), None).await?;
//! // POST orders/packs/17/edit
//! ```

use std::fmt::Display;

use serde::Serialize;

use super::payload_with_key;
use crate::clients::rest::{CrmClient, CrmError};
use crate::clients::ApiResponse;
use crate::rest::{Endpoint, EndpointCall, Filter, Pagination};

impl CrmClient {
    /// Lists packs matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn packs(
        &self,
        filter: &Filter,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        self.list(Endpoint::Packs, filter, pagination).await
    }

    /// Fetches one pack.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn packs_get(
        &self,
        id: impl Display + Send,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::PacksGet)
            .path_id("id", id)
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Creates a pack.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] or [`CrmError::Http`].
    pub async fn packs_create<T: Serialize + ?Sized + Sync>(
        &self,
        pack: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::PacksCreate)
            .payload(pack)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Edits a pack. The path id is taken from the payload's `id` field.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if `pack` has no usable `id`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn packs_edit<T: Serialize + ?Sized + Sync>(
        &self,
        pack: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let (id, pack) = payload_with_key(Endpoint::PacksEdit, pack, "id")?;

        let call = EndpointCall::new(Endpoint::PacksEdit)
            .path_id("id", id)
            .payload(&pack)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Deletes a pack.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn packs_delete(
        &self,
        id: impl Display + Send,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::PacksDelete)
            .path_id("id", id)
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Lists pack changes matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn packs_history(
        &self,
        filter: &Filter,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        self.list(Endpoint::PacksHistory, filter, pagination).await
    }
}
