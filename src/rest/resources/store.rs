//! Warehouse endpoints: stock, products and price uploads.

use serde::Serialize;

use crate::clients::rest::{CrmClient, CrmError};
use crate::clients::ApiResponse;
use crate::rest::{Endpoint, EndpointCall, Filter, Pagination};

impl CrmClient {
    /// Lists stock levels matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn store_inventories(
        &self,
        filter: &Filter,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        self.list(Endpoint::StoreInventories, filter, pagination)
            .await
    }

    /// Lists products matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn store_products(
        &self,
        filter: &Filter,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        self.list(Endpoint::StoreProducts, filter, pagination).await
    }

    /// Uploads stock levels for a list of offers.
    ///
    /// `offers` is sent as a JSON array, like every other payload.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] or [`CrmError::Http`].
    pub async fn store_inventories_upload<T: Serialize + ?Sized + Sync>(
        &self,
        offers: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::StoreInventoriesUpload)
            .payload(offers)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Uploads prices.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Serialization`] or [`CrmError::Http`].
    pub async fn store_prices_upload<T: Serialize + ?Sized + Sync>(
        &self,
        prices: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::StorePricesUpload)
            .payload(prices)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Sends a paged, filtered GET to a list endpoint.
    pub(crate) async fn list(
        &self,
        endpoint: Endpoint,
        filter: &Filter,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(endpoint)
            .param("limit", pagination.limit)
            .param("page", pagination.page)
            .filter(filter);

        self.execute(call).await
    }
}
