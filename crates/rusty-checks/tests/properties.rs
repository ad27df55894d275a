//! Property tests for check application and binding

use proptest::prelude::*;
use rusty_checks::{apply_validators, bind_validators, Check, Checks};
use std::collections::{HashMap, HashSet};

/// Builds a check that fails with `fail-<index>` when `fails` is set
fn scripted(index: usize, fails: bool) -> Check<i64> {
    Check::new(move |_: &i64| {
        if fails {
            Err(format!("fail-{}", index))
        } else {
            Ok(())
        }
    })
}

fn scripted_sequence(outcomes: &[bool]) -> Checks<i64> {
    outcomes
        .iter()
        .enumerate()
        .map(|(index, fails)| scripted(index, *fails))
        .collect()
}

proptest! {
    #[test]
    fn prop_validity_matches_failures(outcomes in prop::collection::vec(any::<bool>(), 0..16), value in any::<i64>()) {
        let result = apply_validators(&scripted_sequence(&outcomes), value);

        let expected: Vec<String> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, fails)| **fails)
            .map(|(index, _)| format!("fail-{}", index))
            .collect();

        prop_assert_eq!(result.is_valid(), expected.is_empty());
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
        prop_assert_eq!(result.messages(), expected.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(*result.value(), value);
    }

    #[test]
    fn prop_application_is_idempotent(outcomes in prop::collection::vec(any::<bool>(), 0..16), value in any::<i64>()) {
        let seq = scripted_sequence(&outcomes);

        let first = apply_validators(&seq, value);
        let second = apply_validators(&seq, value);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_bound_keys_are_intersection(
        configured in prop::collection::hash_set(0u8..32, 0..16),
        data in prop::collection::hash_map(0u8..32, any::<i64>(), 0..16),
    ) {
        let checks_by_field: HashMap<u8, Checks<i64>> = configured
            .iter()
            .map(|key| (*key, vec![scripted(0, key % 2 == 0)]))
            .collect();
        let validate = bind_validators(checks_by_field);

        let results = validate(&data);

        let produced: HashSet<u8> = results.keys().copied().collect();
        let expected: HashSet<u8> = data.keys().copied().filter(|k| configured.contains(k)).collect();
        prop_assert_eq!(produced, expected);

        for (key, field) in &results {
            prop_assert_eq!(field.value(), &data[key]);
            prop_assert_eq!(field.is_valid(), key % 2 != 0);
        }
    }
}
