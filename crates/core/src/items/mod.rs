//! Items module - submitted furniture items, their normalization and stores.

mod items_memory_repository;
mod items_model;
mod items_normalizer;
mod items_service;
mod items_traits;

pub use items_memory_repository::InMemoryItemRepository;
pub use items_model::{Condition, Item, StoredItem};
pub use items_normalizer::normalize_item;
pub use items_service::ItemService;
pub use items_traits::{ItemRepositoryTrait, ItemServiceTrait};
