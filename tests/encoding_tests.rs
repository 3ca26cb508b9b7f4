//! Integration tests for filter, custom-field and id encoding.

use retailcrm_api::rest::{
    encode_custom_fields, encode_filter, encode_ids, CustomFieldValue, CustomFields, Filter,
    FilterValue,
};

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_scalar_filter_entries_are_joined() {
    let filter = Filter::new()
        .with("status", "new")
        .with("minPrice", 100)
        .with("paid", false);

    assert_eq!(
        encode_filter(&filter),
        "filter[status]=new&filter[minPrice]=100&filter[paid]=false"
    );
}

#[test]
fn test_sequence_filter_entries_repeat_key() {
    let filter = Filter::new().with("ids", vec!["10", "11", "12"]);

    assert_eq!(
        encode_filter(&filter),
        "filter[ids][]=10&filter[ids][]=11&filter[ids][]=12"
    );
}

#[test]
fn test_single_entry_has_no_separator() {
    let filter = Filter::new().with("email", "ann@example.com");
    assert_eq!(encode_filter(&filter), "filter[email]=ann@example.com");

    let filter = Filter::new().with("sites", ["main"]);
    assert_eq!(encode_filter(&filter), "filter[sites][]=main");
}

#[test]
fn test_explicit_values() {
    let mut filter = Filter::new();
    filter.insert("a", FilterValue::Scalar("x".to_string()));
    filter.insert("b", FilterValue::List(vec!["y".to_string(), "z".to_string()]));

    assert_eq!(encode_filter(&filter), "filter[a]=x&filter[b][]=y&filter[b][]=z");
}

// ============================================================================
// Custom Fields
// ============================================================================

#[test]
fn test_every_custom_field_fragment_has_leading_ampersand() {
    let fields = CustomFields::new()
        .with("color", "red")
        .with("size", "xl");

    assert_eq!(
        encode_custom_fields(&fields),
        "&filter[customFields][color]=red&filter[customFields][size]=xl"
    );
}

#[test]
fn test_nested_custom_fields_keep_subkey_order() {
    let fields = CustomFields::new().with(
        "delivery_date",
        vec![("from", "2024-01-01"), ("to", "2024-01-31")],
    );

    assert_eq!(
        encode_custom_fields(&fields),
        "&filter[customFields][delivery_date][from]=2024-01-01\
         &filter[customFields][delivery_date][to]=2024-01-31"
    );
}

#[test]
fn test_explicit_nested_value() {
    let mut fields = CustomFields::new();
    fields.insert(
        "size",
        CustomFieldValue::Nested(vec![("xs".to_string(), "1".to_string())]),
    );

    assert_eq!(encode_custom_fields(&fields), "&filter[customFields][size][xs]=1");
}

// ============================================================================
// Ids
// ============================================================================

#[test]
fn test_ids_keep_order() {
    assert_eq!(encode_ids(&[3, 1, 2]), "ids[]=3&ids[]=1&ids[]=2");
}

#[test]
fn test_string_ids() {
    let ids = vec!["A-1".to_string(), "A-2".to_string()];
    assert_eq!(encode_ids(&ids), "ids[]=A-1&ids[]=A-2");
}
