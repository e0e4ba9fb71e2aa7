use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::{Error, Result};
use crate::items::items_model::{Item, StoredItem};
use crate::items::items_traits::ItemRepositoryTrait;

struct ItemTable {
    next_id: i64,
    rows: Vec<StoredItem>,
}

/// Process-lifetime item store.
///
/// One mutex guards both the rows and the id counter, so an insert is
/// atomic and a listing always reflects a prefix of completed inserts.
pub struct InMemoryItemRepository {
    table: Mutex<ItemTable>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(ItemTable {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ItemTable>> {
        self.table
            .lock()
            .map_err(|_| Error::Repository("item store lock poisoned".to_string()))
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepositoryTrait for InMemoryItemRepository {
    async fn insert_item(&self, item: Item) -> Result<StoredItem> {
        let mut table = self.lock()?;
        let stored = StoredItem {
            id: table.next_id,
            item,
        };
        table.next_id += 1;
        table.rows.push(stored.clone());
        Ok(stored)
    }

    fn get_item(&self, item_id: i64) -> Result<StoredItem> {
        self.lock()?
            .rows
            .iter()
            .find(|row| row.id == item_id)
            .cloned()
            .ok_or_else(|| Error::item_not_found(item_id))
    }

    fn list_items(&self) -> Result<Vec<StoredItem>> {
        Ok(self.lock()?.rows.clone())
    }
}
