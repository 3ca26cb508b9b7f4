//! Bracket-style query encoding for filters, custom fields and id lists.
//!
//! RetailCRM list endpoints take their filters as flattened query keys
//! rather than as a structured body:
//!
//! ```text
//! filter[status]=new
//! filter[sites][]=main&filter[sites][]=outlet
//! &filter[customFields][size]=42
//! &filter[customFields][weight][min]=10
//! ids[]=1&ids[]=2
//! ```
//!
//! The encoders here are pure functions. Their output is kept apart from the
//! form-encoded parameters and appended to the query string as it is.
//!
//! Keys and values are interpolated without percent-encoding. A value that
//! contains `&`, `=` or `#` therefore changes the meaning of the query.

/// A single filter value: one scalar or a sequence of scalars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    /// Encoded as `filter[key]=value`.
    Scalar(String),
    /// Encoded as `filter[key][]=v1&filter[key][]=v2`.
    List(Vec<String>),
}

impl FilterValue {
    /// Returns the rendered items: one for a scalar, all of them for a list.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::List(items) => items,
        }
    }
}

/// A single custom-field value: one scalar or a one-level mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomFieldValue {
    /// Encoded as `&filter[customFields][key]=value`.
    Scalar(String),
    /// Encoded as `&filter[customFields][key][subkey]=value` per entry.
    Nested(Vec<(String, String)>),
}

macro_rules! scalar_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }

            impl From<$ty> for CustomFieldValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_conversions!(&str, String, &String, bool, i32, i64, u32, u64, usize, f64);

impl<T: ToString> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for FilterValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<K: Into<String>, V: ToString> From<Vec<(K, V)>> for CustomFieldValue {
    fn from(entries: Vec<(K, V)>) -> Self {
        Self::Nested(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for CustomFieldValue {
    fn from(entries: [(K, V); N]) -> Self {
        Self::Nested(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Filter criteria for a list endpoint.
///
/// Entries keep their insertion order, and the encoded output follows it.
/// Setting a key twice replaces the earlier value in place.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::rest::{encode_filter, Filter};
///
/// let filter = Filter::new()
///     .with("a", 1)
///     .with("b", vec![2, 3]);
///
/// assert_eq!(encode_filter(&filter), "filter[a]=1&filter[b][]=2&filter[b][]=3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    entries: Vec<(String, FilterValue)>,
}

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry and returns the filter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns `true` if the filter has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Self::new();
        for (k, v) in iter {
            filter.insert(k, v);
        }
        filter
    }
}

/// Custom-field criteria for a list endpoint.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::rest::{encode_custom_fields, CustomFields};
///
/// let fields = CustomFields::new().with("size", [("xs", 1)]);
/// assert_eq!(encode_custom_fields(&fields), "&filter[customFields][size][xs]=1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomFields {
    entries: Vec<(String, CustomFieldValue)>,
}

impl CustomFields {
    /// Creates an empty set of custom fields.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry and returns the set.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CustomFieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CustomFieldValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomFieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<CustomFieldValue>> FromIterator<(K, V)> for CustomFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

/// Flattens a filter into `&`-joined `filter[...]` fragments.
///
/// Each entry is encoded on its own and the per-entry strings are joined
/// with `&`. A list is first joined with `&` among its own items, so an
/// empty list contributes an empty segment.
#[must_use]
pub fn encode_filter(filter: &Filter) -> String {
    filter
        .iter()
        .map(|(key, value)| match value {
            FilterValue::Scalar(v) => format!("filter[{key}]={v}"),
            FilterValue::List(items) => items
                .iter()
                .map(|v| format!("filter[{key}][]={v}"))
                .collect::<Vec<_>>()
                .join("&"),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Flattens custom fields into `&filter[customFields][...]` fragments.
///
/// Every fragment carries its own leading `&` and fragments are
/// concatenated without any further separator. The result is meant to be
/// appended to the output of [`encode_filter`].
#[must_use]
pub fn encode_custom_fields(fields: &CustomFields) -> String {
    fields
        .iter()
        .map(|(key, value)| match value {
            CustomFieldValue::Scalar(v) => format!("&filter[customFields][{key}]={v}"),
            CustomFieldValue::Nested(entries) => entries
                .iter()
                .map(|(sub_key, v)| format!("&filter[customFields][{key}][{sub_key}]={v}"))
                .collect::<String>(),
        })
        .collect()
}

/// Flattens an id list into `ids[]=...` fragments joined by `&`.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::rest::encode_ids;
///
/// assert_eq!(encode_ids(&[26120, 19282]), "ids[]=26120&ids[]=19282");
/// assert_eq!(encode_ids::<u64>(&[]), "");
/// ```
#[must_use]
pub fn encode_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter()
        .map(|id| format!("ids[]={}", id.to_string()))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_list_filter() {
        let filter = Filter::new().with("a", 1).with("b", vec![2, 3]);
        assert_eq!(
            encode_filter(&filter),
            "filter[a]=1&filter[b][]=2&filter[b][]=3"
        );
    }

    #[test]
    fn test_filter_follows_insertion_order() {
        let filter = Filter::new()
            .with("status", "new")
            .with("email", "test@example.com")
            .with("createdAtFrom", "2024-01-01");
        assert_eq!(
            encode_filter(&filter),
            "filter[status]=new&filter[email]=test@example.com&filter[createdAtFrom]=2024-01-01"
        );
    }

    #[test]
    fn test_filter_replacing_key_keeps_position() {
        let mut filter = Filter::new().with("a", 1).with("b", 2);
        filter.insert("a", 9);
        assert_eq!(encode_filter(&filter), "filter[a]=9&filter[b]=2");
    }

    #[test]
    fn test_empty_filter_encodes_to_empty_string() {
        assert_eq!(encode_filter(&Filter::new()), "");
    }

    #[test]
    fn test_empty_list_leaves_empty_segment() {
        let filter = Filter::new()
            .with("a", 1)
            .with("b", Vec::<u32>::new())
            .with("c", 3);
        assert_eq!(encode_filter(&filter), "filter[a]=1&&filter[c]=3");
    }

    #[test]
    fn test_filter_values_are_not_escaped() {
        let filter = Filter::new().with("name", "Tom & Jerry");
        assert_eq!(encode_filter(&filter), "filter[name]=Tom & Jerry");
    }

    #[test]
    fn test_filter_booleans_and_arrays() {
        let filter = Filter::new()
            .with("active", true)
            .with("sites", ["main", "outlet"]);
        assert_eq!(
            encode_filter(&filter),
            "filter[active]=true&filter[sites][]=main&filter[sites][]=outlet"
        );
    }

    #[test]
    fn test_filter_from_iterator() {
        let filter: Filter = [("status", "new"), ("site", "main")].into_iter().collect();
        assert_eq!(encode_filter(&filter), "filter[status]=new&filter[site]=main");
    }

    #[test]
    fn test_filter_value_items() {
        assert_eq!(FilterValue::from("new").values(), ["new"]);
        assert_eq!(FilterValue::from(["credit", "charge"]).values(), ["credit", "charge"]);
        assert!(FilterValue::from(Vec::<String>::new()).values().is_empty());
    }

    #[test]
    fn test_custom_field_nested() {
        let fields = CustomFields::new().with("size", [("xs", 1)]);
        assert!(encode_custom_fields(&fields).starts_with("&filter[customFields][size][xs]=1"));
    }

    #[test]
    fn test_custom_fields_scalar_and_nested_concatenate() {
        let fields = CustomFields::new()
            .with("shop_id", 22)
            .with("weight", [("min", 10), ("max", 20)]);
        assert_eq!(
            encode_custom_fields(&fields),
            "&filter[customFields][shop_id]=22\
             &filter[customFields][weight][min]=10\
             &filter[customFields][weight][max]=20"
        );
    }

    #[test]
    fn test_empty_custom_fields_encode_to_empty_string() {
        assert_eq!(encode_custom_fields(&CustomFields::new()), "");
        let fields = CustomFields::new().with("size", Vec::<(String, String)>::new());
        assert_eq!(encode_custom_fields(&fields), "");
    }

    #[test]
    fn test_custom_fields_append_to_filter() {
        let filter = Filter::new().with("status", "new");
        let fields = CustomFields::new().with("size", 42);
        let fragment = encode_filter(&filter) + &encode_custom_fields(&fields);
        assert_eq!(
            fragment,
            "filter[status]=new&filter[customFields][size]=42"
        );
    }

    #[test]
    fn test_encode_ids() {
        assert_eq!(encode_ids(&[1, 2]), "ids[]=1&ids[]=2");
        assert_eq!(encode_ids(&["a-1"]), "ids[]=a-1");
        assert_eq!(encode_ids::<i64>(&[]), "");
    }
}
