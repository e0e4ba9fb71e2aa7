use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::comps::comps_traits::CompRepositoryTrait;
use crate::errors::{Error, Result};
use furnflip_comps::CompListing;

/// Process-lifetime comp store keyed by item id.
#[derive(Default)]
pub struct InMemoryCompRepository {
    by_item: Mutex<HashMap<i64, Vec<CompListing>>>,
}

impl InMemoryCompRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompRepositoryTrait for InMemoryCompRepository {
    async fn replace_comps(&self, item_id: i64, comps: Vec<CompListing>) -> Result<usize> {
        let count = comps.len();
        self.by_item
            .lock()
            .map_err(|_| Error::Repository("comp store lock poisoned".to_string()))?
            .insert(item_id, comps);
        Ok(count)
    }

    fn get_comps(&self, item_id: i64) -> Result<Vec<CompListing>> {
        Ok(self
            .by_item
            .lock()
            .map_err(|_| Error::Repository("comp store lock poisoned".to_string()))?
            .get(&item_id)
            .cloned()
            .unwrap_or_default())
    }
}
