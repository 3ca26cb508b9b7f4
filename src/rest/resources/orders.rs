//! Order endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use retailcrm_api::rest::{CustomFields, Filter, HistoryRange, Pagination};
//! use serde_json::json;
//!
//! // List new orders, 50 per page
//! let filter = Filter::new().with("status", "new");
//! let orders = client.orders(&filter, None, Pagination::new(50, 1)).await?;
//!
//! // Fetch by internal id
//! let order = client.orders_get(1042, "id", None).await?;
//!
//! // Change the status of an order known by its external id
//! client
//!     .orders_edit("A-100", &json!({"status": "complete"}), "externalId", None)
//!     .await?;
//!
//! // Changes since the last sync
//! let history = client.orders_history(&HistoryRange::default().window(100, 200)).await?;
//! ```

use std::fmt::Display;

use serde::Serialize;

use super::BY_EXTERNAL_ID;
use crate::clients::rest::{CrmClient, CrmError};
use crate::clients::ApiResponse;
use crate::rest::{CustomFields, Endpoint, EndpointCall, Filter, HistoryRange, Pagination};

impl CrmClient {
    /// Lists orders matching `filter`.
    ///
    /// Sends GET `orders` with `limit`, `page`, the `filter[...]` fragment
    /// and, on v5, the `filter[customFields][...]` fragment.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedCustomFields`] if non-empty
    /// `custom_fields` are passed to a v3 client, or [`CrmError::Http`].
    pub async fn orders(
        &self,
        filter: &Filter,
        custom_fields: Option<&CustomFields>,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        let mut call = EndpointCall::new(Endpoint::Orders)
            .param("limit", pagination.limit)
            .param("page", pagination.page)
            .filter(filter);
        if let Some(fields) = custom_fields {
            call = call.custom_fields(fields);
        }

        self.execute(call).await
    }

    /// Returns the statuses of the given orders.
    ///
    /// Sends GET `orders/statuses?ids[]=...`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn orders_statuses<T: ToString + Sync>(
        &self,
        ids: &[T],
    ) -> Result<ApiResponse, CrmError> {
        self.execute(EndpointCall::new(Endpoint::OrdersStatuses).ids(ids))
            .await
    }

    /// Fetches one order.
    ///
    /// `by` is either `"externalId"` (the server default, not sent) or
    /// `"id"`. `site` is sent when given.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn orders_get(
        &self,
        id: impl Display + Send,
        by: &str,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::OrdersGet)
            .path_id("id", id)
            .param_opt("by", (by != BY_EXTERNAL_ID).then_some(by))
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] if `order` cannot be serialized,
    /// or [`CrmError::Http`].
    pub async fn orders_create<T: Serialize + ?Sized + Sync>(
        &self,
        order: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::OrdersCreate)
            .payload(order)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Edits an order.
    ///
    /// `by` tells the server whether `id` is an internal id (`"id"`) or an
    /// external id (`"externalId"`) and is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] if `order` cannot be serialized,
    /// or [`CrmError::Http`].
    pub async fn orders_edit<T: Serialize + ?Sized + Sync>(
        &self,
        id: impl Display + Send,
        order: &T,
        by: &str,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::OrdersEdit)
            .path_id("id", id)
            .param("by", by)
            .payload(order)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Creates orders in bulk.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] if `orders` cannot be serialized,
    /// or [`CrmError::Http`].
    pub async fn orders_upload<T: Serialize + ?Sized + Sync>(
        &self,
        orders: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::OrdersUpload)
            .payload(orders)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Binds external ids to existing orders.
    ///
    /// `orders` is a list of `{"id": .., "externalId": ..}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] if `orders` cannot be serialized,
    /// or [`CrmError::Http`].
    pub async fn orders_fix_external_ids<T: Serialize + ?Sized + Sync>(
        &self,
        orders: &T,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::OrdersFixExternalIds).payload(orders)?;
        self.execute(call).await
    }

    /// Returns the order change history for a window.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn orders_history(&self, range: &HistoryRange) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::OrdersHistory).merge(range.to_pairs());
        self.execute(call).await
    }

    /// Spends loyalty bonuses on an order. v5 only.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedEndpoint`] on a v3 client,
    /// [`CrmError::Serialization`] if `order` cannot be serialized, or
    /// [`CrmError::Http`].
    pub async fn loyalty_apply<T: Serialize + ?Sized + Sync>(
        &self,
        order: &T,
        bonuses: i64,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::LoyaltyApply)
            .payload(order)?
            .param("bonuses", bonuses);

        self.execute(call).await
    }
}
