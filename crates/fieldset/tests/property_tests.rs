//! Property-based tests for fieldset.

use fieldset::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn flag_rules(keys: &[String]) -> RuleSet {
    let mut rules = RuleSet::new();
    for key in keys {
        // Duplicate keys in the generated vector are simply skipped.
        let _ = rules.add(boolean(key.clone()).optional());
    }
    rules
}

fn arb_record(keys: Vec<(String, bool)>) -> Record {
    let mut record = Record::new();
    for (key, flag) in keys {
        record.insert(key, Value::Bool(flag));
    }
    record
}

proptest! {
    // ========================================================================
    // DETERMINISM: validate(x) == validate(x)
    // ========================================================================

    #[test]
    fn validation_is_deterministic(
        keys in proptest::collection::vec("[a-z]{1,8}", 0..8),
        values in proptest::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..8),
    ) {
        let rules = flag_rules(&keys);
        let record = arb_record(values);
        let r1 = rules.validate(&record).unwrap();
        let r2 = rules.validate(&record).unwrap();
        prop_assert_eq!(r1, r2);
    }

    // ========================================================================
    // CARDINALITY: one result per rule, regardless of the record
    // ========================================================================

    #[test]
    fn one_result_per_rule(
        keys in proptest::collection::vec("[a-z]{1,8}", 0..8),
        values in proptest::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..8),
    ) {
        let rules = flag_rules(&keys);
        let results = rules.validate(&arb_record(values)).unwrap();
        prop_assert_eq!(results.len(), rules.len());
    }

    // ========================================================================
    // ORDER: output order equals registration order
    // ========================================================================

    #[test]
    fn output_preserves_registration_order(
        keys in proptest::collection::vec("[a-z]{1,8}", 0..8),
    ) {
        let rules = flag_rules(&keys);
        let results = rules.validate(&Record::new()).unwrap();
        let rule_keys: Vec<&str> = rules.iter().map(Rule::key).collect();
        let result_keys: Vec<&str> = results.iter().map(FieldResult::key).collect();
        prop_assert_eq!(rule_keys, result_keys);
    }

    // ========================================================================
    // VALIDITY: the set is valid iff every member is
    // ========================================================================

    #[test]
    fn set_validity_is_the_conjunction_of_members(
        entries in proptest::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..8),
    ) {
        let mut results = ResultSet::new();
        for (key, valid) in &entries {
            let result = if *valid {
                FieldResult::valid(key.clone(), json!(1))
            } else {
                FieldResult::invalid(key.clone(), json!(1), "nope")
            };
            let _ = results.add(result);
        }
        let all_valid = results.iter().all(FieldResult::is_valid);
        prop_assert_eq!(results.is_valid(), all_valid);
    }

    // ========================================================================
    // MESSAGES: exactly the invalid members surface a message
    // ========================================================================

    #[test]
    fn messages_cover_exactly_the_invalid_members(
        entries in proptest::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..8),
    ) {
        let mut results = ResultSet::new();
        for (key, valid) in &entries {
            let result = if *valid {
                FieldResult::valid(key.clone(), json!(1))
            } else {
                FieldResult::invalid(key.clone(), json!(1), "nope")
            };
            let _ = results.add(result);
        }
        let invalid = results.iter().filter(|r| !r.is_valid()).count();
        prop_assert_eq!(results.messages().len(), invalid);
    }
}

// ============================================================================
// FREEZE: idempotent, and permanent for the set's lifetime
// ============================================================================

proptest! {
    #[test]
    fn freezing_is_idempotent(n in 0usize..5) {
        let mut results = ResultSet::new();
        results.add(FieldResult::valid("only", json!(true))).unwrap();
        for _ in 0..n {
            results.freeze();
        }
        prop_assert_eq!(results.is_frozen(), n > 0);
        if n > 0 {
            prop_assert!(results.add(FieldResult::valid("more", json!(1))).is_err());
        }
    }
}
