//! Endpoint layer for the RetailCRM REST API.
//!
//! This module provides:
//!
//! - **Encoders**: [`encode_filter`], [`encode_custom_fields`] and
//!   [`encode_ids`] flatten [`Filter`], [`CustomFields`] and id lists into
//!   bracket-style query fragments
//! - **Endpoint table**: [`Endpoint`] and [`ENDPOINTS`] hold the method,
//!   path template, payload key and minimum version of every operation
//! - **Call assembly**: [`EndpointCall`] collects one request's parameters,
//!   payload and fragments
//! - **Typed inputs**: [`Pagination`] and [`HistoryRange`]
//! - **Endpoint methods**: implemented on [`CrmClient`](crate::CrmClient)
//!   in the [`resources`] submodule
//!
//! # Example
//!
//! ```rust
//! use retailcrm_api::rest::{Endpoint, EndpointCall, Filter, Pagination};
//!
//! let page = Pagination::default();
//! let request = EndpointCall::new(Endpoint::Orders)
//!     .param("limit", page.limit)
//!     .param("page", page.page)
//!     .filter(&Filter::new().with("status", "new"))
//!     .into_request()
//!     .unwrap();
//!
//! assert_eq!(request.query_string(), "limit=20&page=1&filter[status]=new");
//! ```

mod call;
mod encoding;
mod inputs;
mod path;

pub mod resources;

// Public exports
pub use call::EndpointCall;
pub use encoding::{
    encode_custom_fields, encode_filter, encode_ids, CustomFieldValue, CustomFields, Filter,
    FilterValue,
};
pub use inputs::{HistoryRange, Pagination, HISTORY_DATE_FORMAT};
pub use path::{build_path, Endpoint, EndpointPath, ENDPOINTS};
pub use resources::{BY_EXTERNAL_ID, BY_ID};
