//! Comps module - comparable listings per item, fetched through a provider.

mod comps_memory_repository;
mod comps_service;
mod comps_traits;

pub use comps_memory_repository::InMemoryCompRepository;
pub use comps_service::CompService;
pub use comps_traits::{CompRepositoryTrait, CompServiceTrait};

pub use furnflip_comps::{CompListing, CompProvider, CompQuery};
