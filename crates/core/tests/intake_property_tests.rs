//! Property-based tests for the intake pipeline.
//!
//! These check the universal guarantees of the form resolver and the item
//! normalizer over random inputs, using `proptest`.

use furnflip_core::forms::resolve_form;
use furnflip_core::items::normalize_item;
use proptest::prelude::*;
use serde_json::{Map, Number, Value};

// =============================================================================
// Generators
// =============================================================================

const KNOWN_KEYS: [&str; 10] = [
    "category",
    "name",
    "condition",
    "buy_price",
    "repair_cost",
    "fees_pct",
    "notes",
    "material",
    "seats",
    "id",
];

/// Scalar JSON values, biased towards the shapes forms actually send.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        any::<f64>().prop_map(|f| Number::from_f64(f).map_or(Value::Null, Value::Number)),
        "-?[0-9]{1,6}(\\.[0-9]{1,3})?".prop_map(Value::String),
        prop_oneof![
            Just("new"),
            Just("GOOD"),
            Just("fair"),
            Just("poor"),
            Just("NaN"),
            Just("inf"),
            Just("")
        ]
        .prop_map(|s| Value::String(s.to_string())),
        ".{0,12}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(KNOWN_KEYS.to_vec()).prop_map(|k| k.to_string()),
        "[a-z_]{1,10}",
    ]
}

/// Random submission mapping with a mix of known and unknown keys.
fn arb_submission() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(arb_key(), arb_value(), 0..12)
        .prop_map(|m| m.into_iter().collect())
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Normalization never fails and always respects the clamping bounds.
    #[test]
    fn prop_normalizer_is_total_and_clamped(raw in arb_submission()) {
        let item = normalize_item(&raw);
        prop_assert!((0.0..=100.0).contains(&item.fees_pct));
        prop_assert!(item.buy_price >= 0.0);
        prop_assert!(item.repair_cost >= 0.0);
        prop_assert!(item.seats.map_or(true, |s| s >= 1));
        prop_assert!(!item.category.is_empty());
        prop_assert!(!item.material.is_empty());
        prop_assert!(!item.extra.contains_key("id"));
    }

    /// Re-normalizing a normalized item's mapping is a no-op.
    #[test]
    fn prop_normalizer_is_idempotent(raw in arb_submission()) {
        let first = normalize_item(&raw);
        let second = normalize_item(&first.as_mapping());
        prop_assert_eq!(first, second);
    }

    /// Only chairs, sofas and beds get a seats field, exactly once and last.
    #[test]
    fn prop_seats_only_for_seated_categories(category in ".{0,16}") {
        let form = resolve_form(&category);
        let normalized = category.trim().to_lowercase();
        let seated = normalized.is_empty()
            || ["chair", "sofa", "bed"].contains(&normalized.as_str());

        let seat_positions: Vec<usize> = form
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.key == "seats")
            .map(|(i, _)| i)
            .collect();

        if seated {
            prop_assert_eq!(seat_positions, vec![form.fields.len() - 1]);
        } else {
            prop_assert!(seat_positions.is_empty());
        }
        prop_assert_eq!(form.fields[0].key.as_str(), "name");
        prop_assert_eq!(form.fields[6].key.as_str(), "material");
    }

    /// The same category always serializes to the same bytes.
    #[test]
    fn prop_resolver_is_deterministic(category in ".{0,16}") {
        let first = serde_json::to_vec(&resolve_form(&category)).unwrap();
        let second = serde_json::to_vec(&resolve_form(&category)).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn seated_categories_in_any_case() {
    for category in ["chair", "SOFA", " Bed "] {
        let form = resolve_form(category);
        assert_eq!(form.fields.last().map(|f| f.key.as_str()), Some("seats"));
    }
    for category in ["table", "desk", "dresser", "armchair", "beds"] {
        assert!(resolve_form(category).field("seats").is_none());
    }
}
