use crate::errors::Result;
use crate::items::items_model::{Item, StoredItem};
use crate::pricing::Recommendation;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Trait for item store operations.
///
/// Implementations assign ids on insert; ids increase monotonically for the
/// lifetime of the store, and `list_items` returns items in insertion order.
#[async_trait]
pub trait ItemRepositoryTrait: Send + Sync {
    async fn insert_item(&self, item: Item) -> Result<StoredItem>;
    fn get_item(&self, item_id: i64) -> Result<StoredItem>;
    fn list_items(&self) -> Result<Vec<StoredItem>>;
}

/// Trait for item service operations
#[async_trait]
pub trait ItemServiceTrait: Send + Sync {
    async fn create_item(&self, raw: Map<String, Value>) -> Result<StoredItem>;
    fn get_item(&self, item_id: i64) -> Result<StoredItem>;
    fn list_items(&self) -> Result<Vec<StoredItem>>;
    fn recommend_for_item(&self, item_id: i64) -> Result<Recommendation>;
}
