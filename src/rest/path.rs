//! Endpoint table for the RetailCRM REST API.
//!
//! Every operation the client exposes is an [`Endpoint`]. Its HTTP method,
//! path template, payload key and the first API version that serves it live
//! in the const [`ENDPOINTS`] table, so endpoint methods never hard-code any
//! of them.
//!
//! # Example
//!
//! ```rust
//! use retailcrm_api::rest::{build_path, Endpoint};
//! use retailcrm_api::{ApiVersion, HttpMethod};
//!
//! let path = Endpoint::PacksEdit.path();
//! assert_eq!(path.http_method, HttpMethod::Post);
//! assert_eq!(path.template, "orders/packs/{id}/edit");
//! assert_eq!(path.since, ApiVersion::V3);
//!
//! assert_eq!(build_path(path.template, &[("id", 42)]), "orders/packs/42/edit");
//! ```

use std::fmt::{self, Display};

use crate::clients::HttpMethod;
use crate::config::ApiVersion;

/// One variant per API operation.
///
/// The discriminant doubles as the row index in [`ENDPOINTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET orders`
    Orders,
    /// `GET orders/statuses`
    OrdersStatuses,
    /// `GET orders/{id}`
    OrdersGet,
    /// `POST orders/create`
    OrdersCreate,
    /// `POST orders/{id}/edit`
    OrdersEdit,
    /// `POST orders/upload`
    OrdersUpload,
    /// `POST orders/fix-external-ids`
    OrdersFixExternalIds,
    /// `GET orders/history`
    OrdersHistory,
    /// `POST orders/loyalty/apply`
    LoyaltyApply,
    /// `GET customers`
    Customers,
    /// `GET customers/{id}`
    CustomersGet,
    /// `POST customers/create`
    CustomersCreate,
    /// `POST customers/{id}/edit`
    CustomersEdit,
    /// `POST customers/upload`
    CustomersUpload,
    /// `POST customers/fix-external-ids`
    CustomersFixExternalIds,
    /// `GET store/inventories`
    StoreInventories,
    /// `GET store/products`
    StoreProducts,
    /// `POST store/inventories/upload`
    StoreInventoriesUpload,
    /// `POST store/prices/upload`
    StorePricesUpload,
    /// `GET orders/packs`
    Packs,
    /// `GET orders/packs/{id}`
    PacksGet,
    /// `POST orders/packs/create`
    PacksCreate,
    /// `POST orders/packs/{id}/edit`
    PacksEdit,
    /// `POST orders/packs/{id}/delete`
    PacksDelete,
    /// `GET orders/packs/history`
    PacksHistory,
    /// `GET statistic/update`
    StatisticUpdate,
    /// `GET loyalty/accounts`
    LoyaltyAccounts,
    /// `GET loyalty/account/{id}`
    LoyaltyAccountsGet,
    /// `POST loyalty/account/create`
    LoyaltyAccountsCreate,
    /// `POST loyalty/account/{id}/bonus/credit`
    LoyaltyAccountCredit,
    /// `GET loyalty/account/{id}/bonus/operations`
    LoyaltyAccountOperations,
    /// `POST loyalty/calculate`
    LoyaltyCalculate,
    /// `GET reference/delivery-services`
    DeliveryServices,
    /// `POST reference/delivery-services/{code}/edit`
    DeliveryServicesEdit,
    /// `GET reference/delivery-types`
    DeliveryTypes,
    /// `POST reference/delivery-types/{code}/edit`
    DeliveryTypesEdit,
    /// `GET reference/order-methods`
    OrderMethods,
    /// `POST reference/order-methods/{code}/edit`
    OrderMethodsEdit,
    /// `GET reference/order-types`
    OrderTypes,
    /// `POST reference/order-types/{code}/edit`
    OrderTypesEdit,
    /// `GET reference/payment-statuses`
    PaymentStatuses,
    /// `POST reference/payment-statuses/{code}/edit`
    PaymentStatusesEdit,
    /// `GET reference/payment-types`
    PaymentTypes,
    /// `POST reference/payment-types/{code}/edit`
    PaymentTypesEdit,
    /// `GET reference/product-statuses`
    ProductStatuses,
    /// `POST reference/product-statuses/{code}/edit`
    ProductStatusesEdit,
    /// `GET reference/sites`
    Sites,
    /// `POST reference/sites/{code}/edit`
    SitesEdit,
    /// `GET reference/statuses`
    Statuses,
    /// `POST reference/statuses/{code}/edit`
    StatusesEdit,
    /// `GET reference/stores`
    Stores,
    /// `POST reference/stores/{code}/edit`
    StoresEdit,
    /// `GET reference/status-groups`
    StatusGroups,
    /// `GET reference/countries`
    Countries,
}

impl Endpoint {
    /// Returns the table row for this endpoint.
    #[must_use]
    pub const fn path(self) -> &'static EndpointPath {
        &ENDPOINTS[self as usize]
    }

    /// Returns the snake-case operation name, e.g. `orders_get`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.path().name
    }

    /// Returns `true` if `version` serves this endpoint.
    #[must_use]
    pub fn is_available_in(self, version: ApiVersion) -> bool {
        version >= self.path().since
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A row of the endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointPath {
    /// The endpoint this row describes.
    pub endpoint: Endpoint,
    /// Snake-case operation name used in logs and errors.
    pub name: &'static str,
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Path relative to the API root, with `{id}` or `{code}` placeholders.
    pub template: &'static str,
    /// Parameter that carries the JSON-encoded business object, if any.
    pub payload_key: Option<&'static str>,
    /// First API version that serves the endpoint.
    pub since: ApiVersion,
}

impl EndpointPath {
    const fn new(
        endpoint: Endpoint,
        name: &'static str,
        http_method: HttpMethod,
        template: &'static str,
        payload_key: Option<&'static str>,
        since: ApiVersion,
    ) -> Self {
        Self {
            endpoint,
            name,
            http_method,
            template,
            payload_key,
            since,
        }
    }

    const fn get(endpoint: Endpoint, name: &'static str, template: &'static str) -> Self {
        Self::new(endpoint, name, HttpMethod::Get, template, None, ApiVersion::V3)
    }

    const fn post(
        endpoint: Endpoint,
        name: &'static str,
        template: &'static str,
        payload_key: Option<&'static str>,
    ) -> Self {
        Self::new(
            endpoint,
            name,
            HttpMethod::Post,
            template,
            payload_key,
            ApiVersion::V3,
        )
    }

    const fn since(mut self, version: ApiVersion) -> Self {
        self.since = version;
        self
    }
}

use Endpoint as E;
use EndpointPath as P;

/// The endpoint table, in [`Endpoint`] declaration order.
pub const ENDPOINTS: &[EndpointPath] = &[
    // Orders
    P::get(E::Orders, "orders", "orders"),
    P::get(E::OrdersStatuses, "orders_statuses", "orders/statuses"),
    P::get(E::OrdersGet, "orders_get", "orders/{id}"),
    P::post(E::OrdersCreate, "orders_create", "orders/create", Some("order")),
    P::post(E::OrdersEdit, "orders_edit", "orders/{id}/edit", Some("order")),
    P::post(E::OrdersUpload, "orders_upload", "orders/upload", Some("orders")),
    P::post(
        E::OrdersFixExternalIds,
        "orders_fix_external_ids",
        "orders/fix-external-ids",
        Some("orders"),
    ),
    P::get(E::OrdersHistory, "orders_history", "orders/history"),
    P::post(
        E::LoyaltyApply,
        "loyalty_apply",
        "orders/loyalty/apply",
        Some("order"),
    )
    .since(ApiVersion::V5),
    // Customers
    P::get(E::Customers, "customers", "customers"),
    P::get(E::CustomersGet, "customers_get", "customers/{id}"),
    P::post(
        E::CustomersCreate,
        "customers_create",
        "customers/create",
        Some("customer"),
    ),
    P::post(
        E::CustomersEdit,
        "customers_edit",
        "customers/{id}/edit",
        Some("customer"),
    ),
    P::post(
        E::CustomersUpload,
        "customers_upload",
        "customers/upload",
        Some("customers"),
    ),
    P::post(
        E::CustomersFixExternalIds,
        "customers_fix_external_ids",
        "customers/fix-external-ids",
        Some("customers"),
    ),
    // Store
    P::get(E::StoreInventories, "store_inventories", "store/inventories"),
    P::get(E::StoreProducts, "store_products", "store/products"),
    P::post(
        E::StoreInventoriesUpload,
        "store_inventories_upload",
        "store/inventories/upload",
        Some("offers"),
    ),
    P::post(
        E::StorePricesUpload,
        "store_prices_upload",
        "store/prices/upload",
        Some("prices"),
    ),
    // Packs
    P::get(E::Packs, "packs", "orders/packs"),
    P::get(E::PacksGet, "packs_get", "orders/packs/{id}"),
    P::post(E::PacksCreate, "packs_create", "orders/packs/create", Some("pack")),
    P::post(E::PacksEdit, "packs_edit", "orders/packs/{id}/edit", Some("pack")),
    P::post(E::PacksDelete, "packs_delete", "orders/packs/{id}/delete", None),
    P::get(E::PacksHistory, "packs_history", "orders/packs/history"),
    // Statistics
    P::get(E::StatisticUpdate, "statistic_update", "statistic/update"),
    // Loyalty
    P::get(E::LoyaltyAccounts, "loyalty_accounts", "loyalty/accounts").since(ApiVersion::V5),
    P::get(
        E::LoyaltyAccountsGet,
        "loyalty_accounts_get",
        "loyalty/account/{id}",
    )
    .since(ApiVersion::V5),
    P::post(
        E::LoyaltyAccountsCreate,
        "loyalty_accounts_create",
        "loyalty/account/create",
        Some("loyaltyAccount"),
    )
    .since(ApiVersion::V5),
    P::post(
        E::LoyaltyAccountCredit,
        "loyalty_account_credit",
        "loyalty/account/{id}/bonus/credit",
        None,
    )
    .since(ApiVersion::V5),
    P::get(
        E::LoyaltyAccountOperations,
        "loyalty_account_operations",
        "loyalty/account/{id}/bonus/operations",
    )
    .since(ApiVersion::V5),
    P::post(
        E::LoyaltyCalculate,
        "loyalty_calculate",
        "loyalty/calculate",
        Some("order"),
    )
    .since(ApiVersion::V5),
    // Reference books
    P::get(
        E::DeliveryServices,
        "delivery_services",
        "reference/delivery-services",
    ),
    P::post(
        E::DeliveryServicesEdit,
        "delivery_services_edit",
        "reference/delivery-services/{code}/edit",
        Some("deliveryService"),
    ),
    P::get(E::DeliveryTypes, "delivery_types", "reference/delivery-types"),
    P::post(
        E::DeliveryTypesEdit,
        "delivery_types_edit",
        "reference/delivery-types/{code}/edit",
        Some("deliveryType"),
    ),
    P::get(E::OrderMethods, "order_methods", "reference/order-methods"),
    P::post(
        E::OrderMethodsEdit,
        "order_methods_edit",
        "reference/order-methods/{code}/edit",
        Some("orderMethod"),
    ),
    P::get(E::OrderTypes, "order_types", "reference/order-types"),
    P::post(
        E::OrderTypesEdit,
        "order_types_edit",
        "reference/order-types/{code}/edit",
        Some("orderType"),
    ),
    P::get(
        E::PaymentStatuses,
        "payment_statuses",
        "reference/payment-statuses",
    ),
    P::post(
        E::PaymentStatusesEdit,
        "payment_statuses_edit",
        "reference/payment-statuses/{code}/edit",
        Some("paymentStatus"),
    ),
    P::get(E::PaymentTypes, "payment_types", "reference/payment-types"),
    P::post(
        E::PaymentTypesEdit,
        "payment_types_edit",
        "reference/payment-types/{code}/edit",
        Some("paymentType"),
    ),
    P::get(
        E::ProductStatuses,
        "product_statuses",
        "reference/product-statuses",
    ),
    P::post(
        E::ProductStatusesEdit,
        "product_statuses_edit",
        "reference/product-statuses/{code}/edit",
        Some("productStatus"),
    ),
    P::get(E::Sites, "sites", "reference/sites"),
    P::post(
        E::SitesEdit,
        "sites_edit",
        "reference/sites/{code}/edit",
        Some("site"),
    ),
    P::get(E::Statuses, "statuses", "reference/statuses"),
    P::post(
        E::StatusesEdit,
        "statuses_edit",
        "reference/statuses/{code}/edit",
        Some("status"),
    ),
    P::get(E::Stores, "stores", "reference/stores"),
    P::post(
        E::StoresEdit,
        "stores_edit",
        "reference/stores/{code}/edit",
        Some("store"),
    ),
    P::get(E::StatusGroups, "status_groups", "reference/status-groups"),
    P::get(E::Countries, "countries", "reference/countries"),
];

/// Builds a path by replacing `{name}` placeholders with their values.
///
/// Values are percent-encoded, so an id such as `A 1/2` stays inside its
/// own path segment. Placeholders without a value are left as they are.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::rest::build_path;
///
/// assert_eq!(build_path("orders/{id}", &[("id", "A-100")]), "orders/A-100");
/// assert_eq!(
///     build_path("reference/sites/{code}/edit", &[("code", "my shop")]),
///     "reference/sites/my%20shop/edit"
/// );
/// ```
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &[(&str, V)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(&value.to_string()));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint>();
    assert_send_sync::<EndpointPath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_match_declaration_order() {
        for (index, row) in ENDPOINTS.iter().enumerate() {
            assert_eq!(
                row.endpoint as usize, index,
                "{} is out of place in the table",
                row.name
            );
        }
    }

    #[test]
    fn test_every_endpoint_has_a_row() {
        assert_eq!(ENDPOINTS.len(), Endpoint::Countries as usize + 1);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = ENDPOINTS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_templates_are_relative() {
        for row in ENDPOINTS {
            assert!(!row.template.starts_with('/'), "{}", row.name);
            assert!(!row.template.ends_with('/'), "{}", row.name);
        }
    }

    #[test]
    fn test_payload_keys_only_on_post() {
        for row in ENDPOINTS {
            if row.payload_key.is_some() {
                assert_eq!(row.http_method, HttpMethod::Post, "{}", row.name);
            }
        }
    }

    #[test]
    fn test_edit_endpoints_carry_payload_key() {
        for row in ENDPOINTS.iter().filter(|p| p.name.ends_with("_edit")) {
            assert!(row.payload_key.is_some(), "{}", row.name);
            assert_eq!(row.http_method, HttpMethod::Post);
        }
    }

    #[test]
    fn test_loyalty_endpoints_are_v5_only() {
        for row in ENDPOINTS.iter().filter(|p| p.name.starts_with("loyalty")) {
            assert_eq!(row.since, ApiVersion::V5, "{}", row.name);
            assert!(!row.endpoint.is_available_in(ApiVersion::V3));
            assert!(row.endpoint.is_available_in(ApiVersion::V5));
        }
    }

    #[test]
    fn test_everything_else_is_served_since_v3() {
        for row in ENDPOINTS.iter().filter(|p| !p.name.starts_with("loyalty")) {
            assert_eq!(row.since, ApiVersion::V3, "{}", row.name);
        }
    }

    #[test]
    fn test_known_rows() {
        let orders = Endpoint::Orders.path();
        assert_eq!(orders.http_method, HttpMethod::Get);
        assert_eq!(orders.template, "orders");

        let fix = Endpoint::CustomersFixExternalIds.path();
        assert_eq!(fix.http_method, HttpMethod::Post);
        assert_eq!(fix.template, "customers/fix-external-ids");
        assert_eq!(fix.payload_key, Some("customers"));

        let credit = Endpoint::LoyaltyAccountCredit.path();
        assert_eq!(credit.template, "loyalty/account/{id}/bonus/credit");
        assert_eq!(credit.payload_key, None);

        assert_eq!(Endpoint::PacksDelete.path().http_method, HttpMethod::Post);
        assert_eq!(Endpoint::StatisticUpdate.path().http_method, HttpMethod::Get);
    }

    #[test]
    fn test_endpoint_display_uses_name() {
        assert_eq!(Endpoint::OrdersFixExternalIds.to_string(), "orders_fix_external_ids");
        assert_eq!(Endpoint::StoresEdit.name(), "stores_edit");
    }

    #[test]
    fn test_build_path_replaces_placeholders() {
        assert_eq!(build_path("orders/{id}/edit", &[("id", 42)]), "orders/42/edit");
        assert_eq!(
            build_path("loyalty/account/{id}/bonus/operations", &[("id", "5433")]),
            "loyalty/account/5433/bonus/operations"
        );
    }

    #[test]
    fn test_build_path_encodes_values() {
        assert_eq!(build_path("orders/{id}", &[("id", "a/b")]), "orders/a%2Fb");
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        let empty: &[(&str, &str)] = &[];
        assert_eq!(build_path("orders/{id}", empty), "orders/{id}");
        assert_eq!(build_path("orders", &[("id", 1)]), "orders");
    }
}
