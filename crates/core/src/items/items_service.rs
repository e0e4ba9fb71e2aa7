use async_trait::async_trait;
use log::info;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::comps::CompRepositoryTrait;
use crate::errors::Result;
use crate::items::items_model::StoredItem;
use crate::items::items_normalizer::normalize_item;
use crate::items::items_traits::{ItemRepositoryTrait, ItemServiceTrait};
use crate::pricing::{recommend, Recommendation};

pub struct ItemService {
    item_repo: Arc<dyn ItemRepositoryTrait>,
    comp_repo: Arc<dyn CompRepositoryTrait>,
}

impl ItemService {
    pub fn new(
        item_repo: Arc<dyn ItemRepositoryTrait>,
        comp_repo: Arc<dyn CompRepositoryTrait>,
    ) -> Self {
        ItemService {
            item_repo,
            comp_repo,
        }
    }
}

#[async_trait]
impl ItemServiceTrait for ItemService {
    async fn create_item(&self, raw: Map<String, Value>) -> Result<StoredItem> {
        let item = normalize_item(&raw);
        let stored = self.item_repo.insert_item(item).await?;
        info!(
            "Created item {} ({}, {:?})",
            stored.id, stored.item.category, stored.item.name
        );
        Ok(stored)
    }

    fn get_item(&self, item_id: i64) -> Result<StoredItem> {
        self.item_repo.get_item(item_id)
    }

    fn list_items(&self) -> Result<Vec<StoredItem>> {
        self.item_repo.list_items()
    }

    fn recommend_for_item(&self, item_id: i64) -> Result<Recommendation> {
        let stored = self.item_repo.get_item(item_id)?;
        let comps = self.comp_repo.get_comps(item_id)?;
        Ok(recommend(&stored.item, &comps))
    }
}
