//! Behavioural properties of the public API.

use deepset::prelude::*;
use deepset_test::{init_tracing, mapping, sample_payload, sequence, subset_chain};
use serde_json::{Value, json};

#[test]
fn test_reflexivity() {
    init_tracing();
    let payload = Value::Object(sample_payload());
    assert!(is_subset(&payload, &payload, CompareOptions::default()).is_ok());
    assert!(is_subset(&payload, &payload, CompareOptions::strict()).is_ok());
    assert!(
        is_subset(
            &payload,
            &payload,
            CompareOptions::new().with_case_insensitive_keys(true)
        )
        .is_ok()
    );
}

#[test]
fn test_transitivity_over_chain() {
    init_tracing();
    let (a, b, c) = subset_chain();
    let opts = CompareOptions::default();
    assert!(is_subset(&b, &a, opts).is_ok());
    assert!(is_subset(&c, &b, opts).is_ok());
    assert!(is_subset(&c, &a, opts).is_ok());
}

#[test]
fn test_filter_object_against_payload() {
    init_tracing();
    let payload = sample_payload();
    let filter = mapping(json!({
        "user": {"name": "ADA", "roles": ["dev"]},
        "items": [{"sku": "b-2", "price": "20"}]
    }));

    let opts = CompareOptions::new().with_case_insensitive_keys(true);
    assert!(is_map_subset(&payload, &filter, opts).is_ok());

    let err = is_map_subset(&payload, &filter, CompareOptions::default()).unwrap_err();
    assert_eq!(err.path().to_string(), "$.items[0]");
    assert!(matches!(err, SubsetError::NotFound { .. }));
}

#[test]
fn test_null_leaf_matches_only_null_strictly() {
    let payload = sample_payload();
    let strict = CompareOptions::strict();
    assert!(is_map_subset(&payload, &mapping(json!({"note": null})), strict).is_ok());

    let err = is_map_subset(&payload, &mapping(json!({"note": "null"})), strict).unwrap_err();
    assert!(matches!(
        err,
        SubsetError::TypeMismatch {
            superset: Kind::Null,
            subset: Kind::String,
            ..
        }
    ));
}

#[test]
fn test_sequence_roots() {
    let opts = CompareOptions::default();
    let set = sequence(json!(["a", "b", "c"]));
    assert!(is_slice_subset(&set, &sequence(json!(["c", "a"])), opts).is_ok());
    assert!(matches!(
        is_slice_subset(&sequence(json!(["a", "b"])), &sequence(json!(["z"])), opts),
        Err(SubsetError::NotFound { .. })
    ));
}

#[test]
fn test_error_messages_are_readable() {
    let err = is_subset(&json!({"a": {"b": 1}}), &json!({"a": {"c": 1}}), CompareOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "key 'c' not found in superset at $.a");

    let err = is_subset(&json!({}), &json!({"k": 1}), CompareOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "size mismatch at $: subset has 1 keys, superset has 0"
    );
}

#[test]
fn test_merge_then_subset() {
    let destination = sample_payload();
    let source = mapping(json!({"user": {"id": 8}, "extra": [1]}));

    let merged = merge(source.clone(), destination.clone());

    assert!(is_map_subset(&merged, &source, CompareOptions::strict()).is_ok());
    assert_eq!(
        deepset::path::get(&merged, &["user", "Name"]),
        Some(&json!("Ada"))
    );
    assert_eq!(deepset::path::get(&merged, &["user", "id"]), Some(&json!(8)));
    assert!(is_map_subset(&merged, &destination, CompareOptions::default()).is_err());
}

#[test]
fn test_path_lookup() {
    let m = mapping(json!({"d": {"a": 1}}));
    assert_eq!(deepset::path::get(&m, &["d", "a"]), Some(&json!(1)));
    assert_eq!(deepset::path::get(&m, &["d", "z"]), None);
    assert_eq!(deepset::path::get::<&str>(&Mapping::new(), &[]), None);
}
