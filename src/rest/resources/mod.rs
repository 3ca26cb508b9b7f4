//! Endpoint methods of [`CrmClient`](crate::CrmClient), grouped by API area.
//!
//! ```text
//! resources/
//!   orders.rs      <- orders, history, loyalty_apply
//!   customers.rs   <- customers
//!   store.rs       <- inventories, products, uploads
//!   packs.rs       <- order packs
//!   loyalty.rs     <- loyalty accounts and bonus operations
//!   reference.rs   <- reference books, statistics
//! ```
//!
//! Every method returns the raw [`ApiResponse`](crate::ApiResponse)
//! envelope. Business objects are any `T: Serialize` and are sent as a JSON
//! string under the endpoint's payload key.
//!
//! # Example
//!
//! ```rust,ignore
//! use retailcrm_api::rest::{Filter, Pagination};
//! use serde_json::json;
//!
//! let created = client
//!     .orders_create(&json!({"externalId": "A-100", "firstName": "Ann"}), Some("main"))
//!     .await?;
//!
//! let page = client
//!     .customers(&Filter::new().with("email", "ann@example.com"), None, Pagination::default())
//!     .await?;
//!
//! client
//!     .sites_edit(&json!({"code": "main", "name": "Main shop"}))
//!     .await?
//!     .error_for_status()?;
//! ```

mod customers;
mod loyalty;
mod orders;
mod packs;
mod reference;
mod store;

use serde::Serialize;
use serde_json::Value;

use crate::clients::rest::CrmError;
use crate::rest::path::Endpoint;

/// `by` value that selects lookup by external id, the server default.
pub const BY_EXTERNAL_ID: &str = "externalId";

/// `by` value that selects lookup by internal id.
pub const BY_ID: &str = "id";

/// Serializes `value` and reads the top-level `field` the path is built from.
///
/// Strings are used as they are and numbers in their decimal form. Anything
/// else, including a missing or `null` field, is rejected.
fn payload_with_key<T: Serialize + ?Sized>(
    endpoint: Endpoint,
    value: &T,
    field: &'static str,
) -> Result<(String, Value), CrmError> {
    let value = serde_json::to_value(value)?;

    let key = match value.get(field) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(CrmError::MissingField {
                endpoint: endpoint.name(),
                field,
            })
        }
    };

    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_key_from_string_and_number() {
        let (key, _) =
            payload_with_key(Endpoint::SitesEdit, &json!({"code": "main"}), "code").unwrap();
        assert_eq!(key, "main");

        let (key, value) =
            payload_with_key(Endpoint::PacksEdit, &json!({"id": 17, "quantity": 1}), "id").unwrap();
        assert_eq!(key, "17");
        assert_eq!(value["quantity"], 1);
    }

    #[test]
    fn test_payload_key_missing_or_unusable() {
        for payload in [json!({}), json!({"code": null}), json!({"code": ""}), json!({"code": [1]})] {
            let result = payload_with_key(Endpoint::StoresEdit, &payload, "code");
            assert!(
                matches!(
                    result,
                    Err(CrmError::MissingField { endpoint: "stores_edit", field: "code" })
                ),
                "{payload}"
            );
        }
    }

    #[test]
    fn test_payload_key_from_struct() {
        #[derive(Serialize)]
        struct Pack {
            id: u64,
            quantity: u32,
        }

        let (key, value) =
            payload_with_key(Endpoint::PacksEdit, &Pack { id: 5, quantity: 3 }, "id").unwrap();
        assert_eq!(key, "5");
        assert_eq!(value, json!({"id": 5, "quantity": 3}));
    }
}
