//! Reference book endpoints and the statistics trigger.
//!
//! Each editable book has a list method and an `_edit` method. The edit
//! methods read the entry's `code` from the payload and post the whole
//! payload to `reference/{book}/{code}/edit`, which creates the entry if it
//! does not exist yet.

use serde::Serialize;

use super::payload_with_key;
use crate::clients::rest::{CrmClient, CrmError};
use crate::clients::ApiResponse;
use crate::rest::{Endpoint, EndpointCall};

impl CrmClient {
    /// Lists delivery services.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn delivery_services(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::DeliveryServices).await
    }

    /// Creates or edits a delivery service.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn delivery_services_edit<T: Serialize + ?Sized + Sync>(
        &self,
        delivery_service: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::DeliveryServicesEdit, delivery_service)
            .await
    }

    /// Lists delivery types.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn delivery_types(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::DeliveryTypes).await
    }

    /// Creates or edits a delivery type.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn delivery_types_edit<T: Serialize + ?Sized + Sync>(
        &self,
        delivery_type: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::DeliveryTypesEdit, delivery_type)
            .await
    }

    /// Lists order methods.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn order_methods(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::OrderMethods).await
    }

    /// Creates or edits an order method.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn order_methods_edit<T: Serialize + ?Sized + Sync>(
        &self,
        order_method: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::OrderMethodsEdit, order_method)
            .await
    }

    /// Lists order types.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn order_types(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::OrderTypes).await
    }

    /// Creates or edits an order type.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn order_types_edit<T: Serialize + ?Sized + Sync>(
        &self,
        order_type: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::OrderTypesEdit, order_type)
            .await
    }

    /// Lists payment statuses.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn payment_statuses(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::PaymentStatuses).await
    }

    /// Creates or edits a payment status.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn payment_statuses_edit<T: Serialize + ?Sized + Sync>(
        &self,
        payment_status: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::PaymentStatusesEdit, payment_status)
            .await
    }

    /// Lists payment types.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn payment_types(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::PaymentTypes).await
    }

    /// Creates or edits a payment type.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn payment_types_edit<T: Serialize + ?Sized + Sync>(
        &self,
        payment_type: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::PaymentTypesEdit, payment_type)
            .await
    }

    /// Lists product statuses.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn product_statuses(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::ProductStatuses).await
    }

    /// Creates or edits a product status.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn product_statuses_edit<T: Serialize + ?Sized + Sync>(
        &self,
        product_status: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::ProductStatusesEdit, product_status)
            .await
    }

    /// Lists sites.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn sites(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::Sites).await
    }

    /// Creates or edits a site.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn sites_edit<T: Serialize + ?Sized + Sync>(
        &self,
        site: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::SitesEdit, site).await
    }

    /// Lists order statuses.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn statuses(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::Statuses).await
    }

    /// Creates or edits an order status.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn statuses_edit<T: Serialize + ?Sized + Sync>(
        &self,
        status: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::StatusesEdit, status).await
    }

    /// Lists stores.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn stores(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::Stores).await
    }

    /// Creates or edits a store.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::MissingField`] if the payload has no `code`,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn stores_edit<T: Serialize + ?Sized + Sync>(
        &self,
        store: &T,
    ) -> Result<ApiResponse, CrmError> {
        self.reference_edit(Endpoint::StoresEdit, store).await
    }

    /// Lists status groups.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn status_groups(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::StatusGroups).await
    }

    /// Lists the countries available to the account.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn countries(&self) -> Result<ApiResponse, CrmError> {
        self.reference_list(Endpoint::Countries).await
    }

    /// Asks the server to recalculate its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] for dispatch failures.
    pub async fn statistic_update(&self) -> Result<ApiResponse, CrmError> {
        self.execute(EndpointCall::new(Endpoint::StatisticUpdate))
            .await
    }

    async fn reference_list(&self, endpoint: Endpoint) -> Result<ApiResponse, CrmError> {
        self.execute(EndpointCall::new(endpoint)).await
    }

    async fn reference_edit<T: Serialize + ?Sized + Sync>(
        &self,
        endpoint: Endpoint,
        entry: &T,
    ) -> Result<ApiResponse, CrmError> {
        let (code, entry) = payload_with_key(endpoint, entry, "code")?;

        let call = EndpointCall::new(endpoint)
            .path_id("code", code)
            .payload(&entry)?;

        self.execute(call).await
    }
}
