//! Request parameter storage.
//!
//! [`CallParameters`] is the ordered name/value set that becomes the query
//! string of a GET request or the form body of a POST request. Each call
//! builds its own instance, so nothing carries over from one call to the next.

use std::fmt;

use serde::Serialize;

/// Parameter name under which the API key travels.
pub const API_KEY_PARAM: &str = "apiKey";

/// Insertion-ordered request parameters.
///
/// Values are stored already rendered as strings. Business objects are
/// serialized to JSON before insertion via [`insert_json`](Self::insert_json).
/// Inserting a name that already exists replaces its value in place, keeping
/// the original position.
///
/// # Example
///
/// ```rust
/// use retailcrm_api::clients::CallParameters;
///
/// let mut params = CallParameters::new();
/// params.insert("limit", 50);
/// params.insert("page", 2);
/// params.insert_opt("site", None::<&str>);
///
/// assert_eq!(params.to_form_string(), "limit=50&page=2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallParameters {
    pairs: Vec<(String, String)>,
}

impl CallParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets `name` to the string form of `value`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();

        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    /// Adds a `name` pair after the existing ones, keeping any earlier
    /// value stored under the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl ToString) {
        self.pairs.push((name.into(), value.to_string()));
    }

    /// Replaces every value of `name` with `values`, one pair per item.
    ///
    /// The new pairs take the position of the first existing `name` pair,
    /// or go to the end when there was none.
    pub fn insert_all<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let name = name.into();
        let at = self
            .pairs
            .iter()
            .position(|(k, _)| *k == name)
            .unwrap_or(self.pairs.len());
        self.pairs.retain(|(k, _)| *k != name);
        let at = at.min(self.pairs.len());

        let new_pairs: Vec<(String, String)> = values
            .into_iter()
            .map(|v| (name.clone(), v.to_string()))
            .collect();
        self.pairs.splice(at..at, new_pairs);
    }

    /// Sets `name` when `value` is present; does nothing otherwise.
    pub fn insert_opt<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    /// Serializes `value` to a JSON string and stores it under `name`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `value` cannot be serialized.
    pub fn insert_json<T: Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(value)?;
        self.insert(name, json);
        Ok(())
    }

    /// Merges every pair of `other` into this set, in order.
    pub fn extend<I, K, V>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        for (name, value) in other {
            self.insert(name, value);
        }
    }

    /// Returns the first value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded` text.
    ///
    /// Both names and values are percent-encoded, unlike the pre-built
    /// filter and ids fragments which are appended verbatim.
    #[must_use]
    pub fn to_form_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns a copy suitable for logging, with the API key masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let pairs = self
            .pairs
            .iter()
            .map(|(k, v)| {
                if k == API_KEY_PARAM {
                    (k.clone(), "*****".to_string())
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect();
        Self { pairs }
    }
}

impl fmt::Display for CallParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for CallParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_preserves_order() {
        let mut params = CallParameters::new();
        params.insert(API_KEY_PARAM, "key");
        params.insert("limit", 20);
        params.insert("page", 1);

        let names: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["apiKey", "limit", "page"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = CallParameters::new();
        params.insert("limit", 20);
        params.insert("page", 1);
        params.insert("limit", 100);

        assert_eq!(params.len(), 2);
        assert_eq!(params.to_form_string(), "limit=100&page=1");
    }

    #[test]
    fn test_append_keeps_repeated_names() {
        let mut params = CallParameters::new();
        params.append("types", "credit");
        params.append("types", "charge");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("types"), Some("credit"));
        assert_eq!(params.to_form_string(), "types=credit&types=charge");
    }

    #[test]
    fn test_insert_all_replaces_at_first_position() {
        let mut params = CallParameters::new();
        params.insert("limit", 100);
        params.insert("page", 1);
        params.insert_all("limit", [10, 20]);
        params.insert_all("types", ["credit", "charge"]);

        assert_eq!(
            params.to_form_string(),
            "limit=10&limit=20&page=1&types=credit&types=charge"
        );

        params.insert_all("limit", [50]);
        assert_eq!(
            params.to_form_string(),
            "limit=50&page=1&types=credit&types=charge"
        );
    }

    #[test]
    fn test_insert_opt_skips_none() {
        let mut params = CallParameters::new();
        params.insert_opt("site", None::<String>);
        params.insert_opt("by", Some("id"));

        assert_eq!(params.get("site"), None);
        assert_eq!(params.get("by"), Some("id"));
    }

    #[test]
    fn test_insert_json_serializes_value() {
        let mut params = CallParameters::new();
        params
            .insert_json("order", &json!({"externalId": "a-1"}))
            .unwrap();

        assert_eq!(params.get("order"), Some(r#"{"externalId":"a-1"}"#));
    }

    #[test]
    fn test_booleans_render_as_words() {
        let mut params = CallParameters::new();
        params.insert("skipMyChanges", true);
        assert_eq!(params.get("skipMyChanges"), Some("true"));
    }

    #[test]
    fn test_form_string_percent_encodes() {
        let mut params = CallParameters::new();
        params.insert("order", r#"{"email":"a&b@example.com"}"#);

        assert_eq!(
            params.to_form_string(),
            "order=%7B%22email%22%3A%22a%26b%40example.com%22%7D"
        );
    }

    #[test]
    fn test_empty_params_encode_to_empty_string() {
        assert_eq!(CallParameters::new().to_form_string(), "");
        assert!(CallParameters::new().is_empty());
    }

    #[test]
    fn test_redacted_masks_api_key_only() {
        let params: CallParameters = [(API_KEY_PARAM, "secret"), ("page", "2")]
            .into_iter()
            .collect();
        let redacted = params.redacted();

        assert_eq!(redacted.get(API_KEY_PARAM), Some("*****"));
        assert_eq!(redacted.get("page"), Some("2"));
        assert_eq!(params.get(API_KEY_PARAM), Some("secret"));
        assert_eq!(redacted.to_string(), "{apiKey: *****, page: 2}");
    }
}
