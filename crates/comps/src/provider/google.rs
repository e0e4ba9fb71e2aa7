//! Google Custom Search comp provider.
//!
//! Searches the web with the Custom Search JSON API and reads a price out of
//! each result snippet. API documentation:
//! https://developers.google.com/custom-search/v1/reference/rest/v1/cse/list

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::CompsError;
use crate::models::{CompListing, CompQuery};
use crate::price::parse_price;
use crate::provider::CompProvider;

const BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
const PROVIDER_ID: &str = "GOOGLE";
const SOURCE: &str = "google";

/// The API returns at most this many results per request.
const MAX_RESULTS_PER_REQUEST: usize = 10;

/// Title of the placeholder listing returned when credentials are missing.
pub const MISSING_CREDENTIALS_TITLE: &str = "Missing GOOGLE_API_KEY or GOOGLE_CX";

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

// ============================================================================
// GoogleSearchProvider
// ============================================================================

/// API key and search engine id for the Custom Search API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoogleCredentials {
    pub api_key: String,
    pub cx: String,
}

impl GoogleCredentials {
    /// Build credentials when both values are present and non-blank.
    pub fn from_parts(api_key: Option<String>, cx: Option<String>) -> Option<Self> {
        let api_key = api_key.filter(|v| !v.trim().is_empty())?;
        let cx = cx.filter(|v| !v.trim().is_empty())?;
        Some(Self { api_key, cx })
    }
}

/// Comp provider backed by Google Custom Search.
///
/// Without credentials it makes no request and answers with a single
/// unpriced listing explaining what is missing.
pub struct GoogleSearchProvider {
    client: Client,
    credentials: Option<GoogleCredentials>,
    limit: usize,
}

impl GoogleSearchProvider {
    pub fn new(credentials: Option<GoogleCredentials>, limit: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            limit,
        }
    }

    fn provider_error(message: String) -> CompsError {
        CompsError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message,
        }
    }

    /// Timeouts get their own variant; any other transport failure is a network error.
    fn request_error(err: reqwest::Error) -> CompsError {
        if err.is_timeout() {
            CompsError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            CompsError::Network(err)
        }
    }

    async fn search(
        &self,
        credentials: &GoogleCredentials,
        query: &str,
    ) -> Result<String, CompsError> {
        let num = self.limit.clamp(1, MAX_RESULTS_PER_REQUEST).to_string();
        debug!("Google search request: q={:?} num={}", query, num);

        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("key", credentials.api_key.as_str()),
                ("cx", credentials.cx.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(Self::request_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompsError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Google search failed with HTTP {}", status);
            return Err(Self::provider_error(format!("HTTP {} - {}", status, body)));
        }

        response.text().await.map_err(Self::request_error)
    }

    /// Map a raw search response body to listings, keeping at most `limit`.
    fn listings_from_body(&self, body: &str) -> Result<Vec<CompListing>, CompsError> {
        let response: SearchResponse = serde_json::from_str(body)
            .map_err(|e| Self::provider_error(format!("Failed to parse response: {}", e)))?;

        Ok(response
            .items
            .into_iter()
            .take(self.limit)
            .map(|item| {
                let price = parse_price(&item.snippet);
                CompListing::new(item.title, price, SOURCE, item.link).with_snippet(item.snippet)
            })
            .collect())
    }
}

#[async_trait]
impl CompProvider for GoogleSearchProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_comps(&self, query: &CompQuery) -> Result<Vec<CompListing>, CompsError> {
        let Some(credentials) = &self.credentials else {
            warn!("Google comps requested without credentials");
            return Ok(vec![CompListing::new(
                MISSING_CREDENTIALS_TITLE,
                None,
                SOURCE,
                "",
            )
            .with_snippet("")]);
        };

        let body = self.search(credentials, &query.search_text()).await?;
        self.listings_from_body(&body)
    }
}
