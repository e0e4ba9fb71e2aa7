//! Comp listing and query models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::price::parse_price;

/// Category used when a query arrives without one.
pub const DEFAULT_CATEGORY: &str = "chair";

/// A comparable market listing used as a price reference point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompListing {
    /// Listing headline as shown by the source
    #[serde(default)]
    pub title: String,

    /// Asking price; `None` when the source gave nothing parseable.
    /// Price text such as `"$45"` is read with [`parse_price`].
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,

    /// Where the listing came from (e.g. "demo", "google")
    #[serde(default)]
    pub source: String,

    /// Link to the listing; may be empty
    #[serde(default)]
    pub link: String,

    /// Raw text the price was scraped from, when there was one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl CompListing {
    /// Create a listing with the required fields and no snippet.
    pub fn new(
        title: impl Into<String>,
        price: Option<f64>,
        source: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            source: source.into(),
            link: link.into(),
            snippet: None,
        }
    }

    /// Set the snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => parse_price(text.trim()),
        _ => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

/// What to look comps up for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompQuery {
    /// Lowercased, trimmed furniture category
    pub category: String,
    /// Free-form item name, trimmed; may be empty
    pub name: String,
}

impl CompQuery {
    pub fn new(category: &str, name: &str) -> Self {
        let category = category.trim().to_lowercase();
        Self {
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category
            },
            name: name.trim().to_string(),
        }
    }

    /// Search text sent to providers: `"<name> <category>"`, or just the
    /// category when there is no name.
    pub fn search_text(&self) -> String {
        if self.name.is_empty() {
            self.category.clone()
        } else {
            format!("{} {}", self.name, self.category)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_normalizes_category() {
        let query = CompQuery::new("  SoFa ", " Chesterfield ");
        assert_eq!(query.category, "sofa");
        assert_eq!(query.name, "Chesterfield");
        assert_eq!(query.search_text(), "Chesterfield sofa");
    }

    #[test]
    fn test_query_defaults_empty_category() {
        let query = CompQuery::new("   ", "");
        assert_eq!(query.category, DEFAULT_CATEGORY);
        assert_eq!(query.search_text(), "chair");
    }

    #[test]
    fn test_listing_deserializes_missing_fields() {
        let listing: CompListing = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        assert_eq!(listing.price, Some(12.5));
        assert!(listing.title.is_empty());
        assert!(listing.snippet.is_none());
    }

    #[test]
    fn test_listing_reads_price_text() {
        let listing: CompListing = serde_json::from_str(r#"{"price": "$45"}"#).unwrap();
        assert_eq!(listing.price, Some(45.0));

        let listing: CompListing = serde_json::from_str(r#"{"price": "$1,250.50"}"#).unwrap();
        assert_eq!(listing.price, Some(1250.5));
    }

    #[test]
    fn test_listing_unusable_price_is_absent() {
        for raw in [
            r#"{"price": "n/a"}"#,
            r#"{"price": null}"#,
            r#"{"price": true}"#,
            r#"{"price": [45]}"#,
            r#"{"price": {"amount": 45}}"#,
        ] {
            let listing: CompListing = serde_json::from_str(raw).unwrap();
            assert_eq!(listing.price, None, "{}", raw);
        }
    }
}
