//! Request and response bodies that exist only at the HTTP edge.

use furnflip_comps::CompListing;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct InterpretRequest {
    pub message: String,
    pub state: Map<String, Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct FormRequest {
    pub category: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CompsRequest {
    pub category: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompsResponse {
    pub items: Vec<CompListing>,
}

impl From<Vec<CompListing>> for CompsResponse {
    fn from(items: Vec<CompListing>) -> Self {
        Self { items }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RecommendationRequest {
    pub item: Value,
    pub comps: Vec<CompListing>,
}
