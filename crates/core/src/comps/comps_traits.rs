use crate::errors::Result;
use async_trait::async_trait;
use furnflip_comps::{CompListing, CompQuery};

/// Trait for per-item comp store operations.
#[async_trait]
pub trait CompRepositoryTrait: Send + Sync {
    /// Drop the item's previous comps and store `comps` in their place.
    async fn replace_comps(&self, item_id: i64, comps: Vec<CompListing>) -> Result<usize>;
    fn get_comps(&self, item_id: i64) -> Result<Vec<CompListing>>;
}

/// Trait for comp service operations
#[async_trait]
pub trait CompServiceTrait: Send + Sync {
    async fn fetch_comps(&self, query: &CompQuery) -> Result<Vec<CompListing>>;
    async fn refresh_item_comps(&self, item_id: i64) -> Result<Vec<CompListing>>;
    fn get_item_comps(&self, item_id: i64) -> Result<Vec<CompListing>>;
}
