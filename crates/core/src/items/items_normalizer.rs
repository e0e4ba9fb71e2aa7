//! Forgiving normalization of raw item submissions.
//!
//! Upstream forms send whatever they have: numbers as strings, missing keys,
//! `null`s, extra keys. Every field is parsed on its own with a fallback, so
//! normalization never fails.

use serde_json::{Map, Value};

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_MATERIAL, MAX_FEES_PCT};
use crate::items::items_model::{Condition, Item};

const KNOWN_KEYS: [&str; 9] = [
    "category",
    "name",
    "condition",
    "buy_price",
    "repair_cost",
    "fees_pct",
    "notes",
    "material",
    "seats",
];

/// Keys dropped from the extras because stores own them.
const RESERVED_KEYS: [&str; 1] = ["id"];

/// Turn an arbitrary submitted mapping into a well-formed [`Item`].
pub fn normalize_item(raw: &Map<String, Value>) -> Item {
    let extra = raw
        .iter()
        .filter(|(key, _)| {
            !KNOWN_KEYS.contains(&key.as_str()) && !RESERVED_KEYS.contains(&key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Item {
        category: text_or(raw.get("category"), DEFAULT_CATEGORY),
        name: text_or(raw.get("name"), ""),
        condition: raw
            .get("condition")
            .and_then(Value::as_str)
            .and_then(Condition::parse)
            .unwrap_or_default(),
        buy_price: number_or_zero(raw.get("buy_price")).max(0.0),
        repair_cost: number_or_zero(raw.get("repair_cost")).max(0.0),
        fees_pct: number_or_zero(raw.get("fees_pct")).clamp(0.0, MAX_FEES_PCT),
        notes: text_or(raw.get("notes"), ""),
        material: text_or(raw.get("material"), DEFAULT_MATERIAL),
        seats: raw.get("seats").and_then(seat_count),
        extra,
    }
}

/// A finite number from a JSON number or a numeric string.
fn loose_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn number_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(loose_number).unwrap_or(0.0)
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => fallback.to_string(),
    }
}

/// Truncate toward zero; anything below one seat means "not given".
fn seat_count(value: &Value) -> Option<u32> {
    let seats = loose_number(value)?.trunc();
    if seats < 1.0 || seats > f64::from(u32::MAX) {
        return None;
    }
    Some(seats as u32)
}
