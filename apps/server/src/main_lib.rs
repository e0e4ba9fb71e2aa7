use std::sync::Arc;

use crate::config::{CompsSource, Config, StoreKind};
use furnflip_comps::{CompProvider, DemoProvider, GoogleCredentials, GoogleSearchProvider};
use furnflip_core::{
    comps::{CompRepositoryTrait, CompService, CompServiceTrait, InMemoryCompRepository},
    items::{InMemoryItemRepository, ItemRepositoryTrait, ItemService, ItemServiceTrait},
};
use furnflip_storage_sqlite::{
    comps::CompRepository,
    db::{self, write_actor},
    items::ItemRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub item_service: Arc<dyn ItemServiceTrait + Send + Sync>,
    pub comp_service: Arc<dyn CompServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

type Stores = (Arc<dyn ItemRepositoryTrait>, Arc<dyn CompRepositoryTrait>);

fn build_stores(config: &Config) -> anyhow::Result<Stores> {
    match config.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory store; items are lost on restart");
            let items: Arc<dyn ItemRepositoryTrait> = Arc::new(InMemoryItemRepository::new());
            let comps: Arc<dyn CompRepositoryTrait> = Arc::new(InMemoryCompRepository::new());
            Ok((items, comps))
        }
        StoreKind::Sqlite => {
            let db_path = db::init(&config.db_path)?;
            tracing::info!("Database path in use: {}", db_path);
            let pool = db::create_pool(&db_path)?;
            db::run_migrations(&pool)?;
            let writer = write_actor::spawn_writer((*pool).clone());
            let items: Arc<dyn ItemRepositoryTrait> =
                Arc::new(ItemRepository::new(pool.clone(), writer.clone()));
            let comps: Arc<dyn CompRepositoryTrait> = Arc::new(CompRepository::new(pool, writer));
            Ok((items, comps))
        }
    }
}

fn build_provider(config: &Config) -> Arc<dyn CompProvider> {
    match config.comps_source {
        CompsSource::Demo => Arc::new(DemoProvider::new()),
        CompsSource::Google => {
            let credentials = GoogleCredentials::from_parts(
                config.google_api_key.clone(),
                config.google_cx.clone(),
            );
            if credentials.is_none() {
                tracing::warn!(
                    "GOOGLE_API_KEY or GOOGLE_CX not set; comp searches return a placeholder"
                );
            }
            Arc::new(GoogleSearchProvider::new(credentials, config.comps_limit))
        }
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let (item_repo, comp_repo) = build_stores(config)?;
    let provider = build_provider(config);
    tracing::info!("Comp provider: {}", provider.id());

    let item_service = Arc::new(ItemService::new(item_repo.clone(), comp_repo.clone()));
    let comp_service = Arc::new(CompService::new(provider, item_repo, comp_repo));

    Ok(Arc::new(AppState {
        item_service,
        comp_service,
    }))
}
