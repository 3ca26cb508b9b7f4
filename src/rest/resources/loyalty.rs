//! Loyalty program endpoints. All of them need API v5.
//!
//! # Example
//!
//! ```rust,ignore
//! use retailcrm_api::rest::Filter;
//! use retailcrm_api::CallParameters;
//!
//! let credit: CallParameters = [("amount", "100"), ("comment", "Birthday")]
//!     .into_iter()
//!     .collect();
//! client.loyalty_account_credit(5433, &credit).await?;
//!
//! let window = Filter::new()
//!     .with("createdAtFrom", "2022-03-20")
//!     .with("createdAtTo", "2022-03-21");
//! let operations = client.loyalty_account_operations(5433, &window, None).await?;
//! ```

use std::fmt::Display;

use serde::Serialize;

use crate::clients::rest::{CrmClient, CrmError};
use crate::clients::{ApiResponse, CallParameters};
use crate::rest::{Endpoint, EndpointCall, Filter, Pagination};

/// Page size used for bonus operations when none is given.
const OPERATIONS_PAGE_LIMIT: u32 = 100;

impl CrmClient {
    /// Lists loyalty accounts matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedEndpoint`] on a v3 client, or
    /// [`CrmError::Http`].
    pub async fn loyalty_accounts(
        &self,
        filter: &Filter,
        pagination: Pagination,
    ) -> Result<ApiResponse, CrmError> {
        self.list(Endpoint::LoyaltyAccounts, filter, pagination)
            .await
    }

    /// Fetches one loyalty account.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedEndpoint`] on a v3 client, or
    /// [`CrmError::Http`].
    pub async fn loyalty_accounts_get(
        &self,
        id: impl Display + Send,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::LoyaltyAccountsGet)
            .path_id("id", id)
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Enrolls a customer in the loyalty program.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedEndpoint`] on a v3 client,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn loyalty_accounts_create<T: Serialize + ?Sized + Sync>(
        &self,
        loyalty_account: &T,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::LoyaltyAccountsCreate)
            .payload(loyalty_account)?
            .param_opt("site", site);

        self.execute(call).await
    }

    /// Credits bonuses to an account.
    ///
    /// `params` (`amount`, `expireDate`, `comment`, ...) become the request
    /// parameters as they are.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedEndpoint`] on a v3 client, or
    /// [`CrmError::Http`].
    pub async fn loyalty_account_credit(
        &self,
        loyalty_account_id: impl Display + Send,
        params: &CallParameters,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::LoyaltyAccountCredit)
            .path_id("id", loyalty_account_id)
            .merge(params.iter());

        self.execute(call).await
    }

    /// Lists bonus operations of an account.
    ///
    /// `filter` entries are sent as plain parameters next to `limit` and
    /// `page` and override them on a name clash. A list value repeats its
    /// name once per item (`types=credit&types=charge`). Without `pagination` the
    /// first page of 100 is requested.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedEndpoint`] on a v3 client, or
    /// [`CrmError::Http`].
    pub async fn loyalty_account_operations(
        &self,
        loyalty_account_id: impl Display + Send,
        filter: &Filter,
        pagination: Option<Pagination>,
    ) -> Result<ApiResponse, CrmError> {
        let pagination = pagination.unwrap_or(Pagination::new(OPERATIONS_PAGE_LIMIT, 1));

        let call = EndpointCall::new(Endpoint::LoyaltyAccountOperations)
            .path_id("id", loyalty_account_id)
            .param("limit", pagination.limit)
            .param("page", pagination.page)
            .plain_filter(filter);

        self.execute(call).await
    }

    /// Calculates the bonuses an order would earn and could spend.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::UnsupportedEndpoint`] on a v3 client,
    /// [`CrmError::Serialization`], or [`CrmError::Http`].
    pub async fn loyalty_calculate<T: Serialize + ?Sized + Sync>(
        &self,
        order: &T,
        bonuses: f64,
        site: Option<&str>,
    ) -> Result<ApiResponse, CrmError> {
        let call = EndpointCall::new(Endpoint::LoyaltyCalculate)
            .payload(order)?
            .param("bonuses", bonuses)
            .param_opt("site", site);

        self.execute(call).await
    }
}
