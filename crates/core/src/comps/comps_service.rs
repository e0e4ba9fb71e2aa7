use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use crate::comps::comps_traits::{CompRepositoryTrait, CompServiceTrait};
use crate::errors::Result;
use crate::items::ItemRepositoryTrait;
use furnflip_comps::{CompListing, CompProvider, CompQuery};

/// Fetches comps through a provider and keeps them per item.
pub struct CompService {
    provider: Arc<dyn CompProvider>,
    item_repo: Arc<dyn ItemRepositoryTrait>,
    comp_repo: Arc<dyn CompRepositoryTrait>,
}

impl CompService {
    pub fn new(
        provider: Arc<dyn CompProvider>,
        item_repo: Arc<dyn ItemRepositoryTrait>,
        comp_repo: Arc<dyn CompRepositoryTrait>,
    ) -> Self {
        Self {
            provider,
            item_repo,
            comp_repo,
        }
    }
}

#[async_trait]
impl CompServiceTrait for CompService {
    async fn fetch_comps(&self, query: &CompQuery) -> Result<Vec<CompListing>> {
        debug!(
            "Fetching comps from {} for {:?}",
            self.provider.id(),
            query.search_text()
        );
        self.provider.fetch_comps(query).await.map_err(|e| {
            warn!("Comp provider {} failed: {}", self.provider.id(), e);
            e.into()
        })
    }

    async fn refresh_item_comps(&self, item_id: i64) -> Result<Vec<CompListing>> {
        let stored = self.item_repo.get_item(item_id)?;
        let query = CompQuery::new(&stored.item.category, &stored.item.name);
        let comps = self.fetch_comps(&query).await?;
        self.comp_repo.replace_comps(item_id, comps.clone()).await?;
        Ok(comps)
    }

    fn get_item_comps(&self, item_id: i64) -> Result<Vec<CompListing>> {
        self.item_repo.get_item(item_id)?;
        self.comp_repo.get_comps(item_id)
    }
}
