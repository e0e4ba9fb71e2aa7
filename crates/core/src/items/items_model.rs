//! Item domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Physical condition of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    #[default]
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    /// Case-insensitive lookup; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == wanted)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized item submission.
///
/// Built by [`normalize_item`](crate::items::normalize_item) only, so every
/// instance satisfies the clamping rules: `fees_pct` in [0, 100] and
/// non-negative `buy_price` and `repair_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub category: String,
    pub name: String,
    pub condition: Condition,
    pub buy_price: f64,
    pub repair_cost: f64,
    pub fees_pct: f64,
    pub notes: String,
    pub material: String,
    pub seats: Option<u32>,
    /// Submitted keys the intake form does not know about, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// The item as a flat JSON object, extras alongside the known fields.
    pub fn as_mapping(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Total money sunk into the item before selling it.
    pub fn cost_basis(&self) -> f64 {
        self.buy_price + self.repair_cost
    }
}

/// An item as kept by a store, with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: i64,
    #[serde(flatten)]
    pub item: Item,
}
