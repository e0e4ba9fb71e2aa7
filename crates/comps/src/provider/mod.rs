//! Comp provider abstraction and implementations.

use async_trait::async_trait;

use crate::errors::CompsError;
use crate::models::{CompListing, CompQuery};

pub mod demo;
pub mod google;

/// Trait for comp sources.
///
/// Implement this trait to add a new place to look up comparable listings.
/// Providers never retry; a failed request is returned to the caller.
#[async_trait]
pub trait CompProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "DEMO" or "GOOGLE".
    fn id(&self) -> &'static str;

    /// Fetch listings comparable to the queried item.
    async fn fetch_comps(&self, query: &CompQuery) -> Result<Vec<CompListing>, CompsError>;
}
