//! Fixed demo comps, used when no search API is configured.

use async_trait::async_trait;

use crate::errors::CompsError;
use crate::models::{CompListing, CompQuery};
use crate::provider::CompProvider;

const PROVIDER_ID: &str = "DEMO";
const SOURCE: &str = "demo";

const DEMO_LISTINGS: [(&str, f64, &str); 4] = [
    ("A", 45.0, "https://example.com/a"),
    ("B", 60.0, "https://example.com/b"),
    ("C", 75.0, "https://example.com/c"),
    ("D", 90.0, "https://example.com/d"),
];

/// Returns the same four priced listings for every query, titled after it.
#[derive(Debug, Default, Clone)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompProvider for DemoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_comps(&self, query: &CompQuery) -> Result<Vec<CompListing>, CompsError> {
        let subject = query.search_text();
        Ok(DEMO_LISTINGS
            .iter()
            .map(|(letter, price, link)| {
                CompListing::new(
                    format!("{} - listing {}", subject, letter),
                    Some(*price),
                    SOURCE,
                    *link,
                )
            })
            .collect())
    }
}
