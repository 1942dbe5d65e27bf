//! Nested result-set navigation tests.

use fieldset::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn record(value: Value) -> Record {
    value.as_object().cloned().expect("object literal")
}

fn profile_rules() -> RuleSet {
    let prefs = RuleSet::builder()
        .rule(boolean("newsletter"))
        .rule(boolean("digest").optional())
        .build()
        .unwrap();

    RuleSet::builder()
        .rule(callback("name", |value, _context, key| match value.as_str() {
            Some(s) if !s.is_empty() => FieldResult::valid(key, value.clone()),
            _ => FieldResult::invalid(key, value.clone(), "Name must be a non-empty string"),
        }))
        .rule(nested("preferences", prefs))
        .build()
        .unwrap()
}

#[test]
fn nested_objects_validate_field_by_field() {
    let rules = profile_rules();
    let results = rules
        .validate(&record(json!({
            "name": "Ada",
            "preferences": {"newsletter": true},
        })))
        .unwrap();

    assert!(results.is_valid());

    let preferences = results.get_result("preferences").unwrap();
    let newsletter = preferences.nested_result("newsletter").unwrap();
    assert!(newsletter.is_valid());
    assert_eq!(newsletter.value().as_json(), Some(&json!(true)));

    // The optional inner field fell back to its default.
    let digest = preferences.nested_result("digest").unwrap();
    assert_eq!(digest.value().as_json(), Some(&json!(false)));
}

#[test]
fn inner_failures_invalidate_the_outer_result() {
    let rules = profile_rules();
    let results = rules
        .validate(&record(json!({
            "name": "Ada",
            "preferences": {"newsletter": "yes"},
        })))
        .unwrap();

    assert!(!results.is_valid());

    let preferences = results.get_result("preferences").unwrap();
    assert!(!preferences.is_valid());
    assert_eq!(
        preferences.message(),
        Some("One or more nested fields failed validation")
    );

    let newsletter = preferences.nested_result("newsletter").unwrap();
    assert_eq!(
        newsletter.message(),
        Some("Expected boolean value; received string")
    );
}

#[test]
fn non_object_values_fail_the_nested_rule() {
    let rules = profile_rules();
    let results = rules
        .validate(&record(json!({"name": "Ada", "preferences": 42})))
        .unwrap();

    let preferences = results.get_result("preferences").unwrap();
    assert!(!preferences.is_valid());
    assert_eq!(
        preferences.message(),
        Some("Expected object value; received number")
    );
}

#[test]
fn missing_nested_field_composes_an_empty_set() {
    let rules = profile_rules();
    let results = rules.validate(&record(json!({"name": "Ada"}))).unwrap();

    let preferences = results.get_result("preferences").unwrap();
    assert!(!preferences.is_valid());
    assert_eq!(preferences.message(), Some(MISSING_MESSAGE));

    let inner = preferences.nested().unwrap();
    assert!(inner.is_empty());
}

#[test]
fn navigating_a_flat_result_as_nested_fails() {
    let rules = profile_rules();
    let results = rules
        .validate(&record(json!({
            "name": "Ada",
            "preferences": {"newsletter": true},
        })))
        .unwrap();

    let name = results.get_result("name").unwrap();
    let err = name.nested_result("anything").unwrap_err();
    assert_eq!(err, RuleError::not_nested("name"));
}

#[test]
fn nested_values_flatten_into_json_objects() {
    let rules = profile_rules();
    let results = rules
        .validate(&record(json!({
            "name": "Ada",
            "preferences": {"newsletter": true, "digest": true},
        })))
        .unwrap();

    assert_eq!(
        Value::Object(results.values()),
        json!({
            "name": "Ada",
            "preferences": {"newsletter": true, "digest": true},
        })
    );
}
