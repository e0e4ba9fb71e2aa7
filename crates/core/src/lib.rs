//! FurnFlip Core - Domain entities, services, and traits.
//!
//! This crate holds the intake and pricing logic: category detection,
//! form schema resolution, item normalization and the resale price
//! recommendation. It is database-agnostic and defines the store traits
//! implemented by the `storage-sqlite` crate (and by the in-memory stores
//! shipped here).

pub mod agent;
pub mod categories;
pub mod comps;
pub mod constants;
pub mod errors;
pub mod forms;
pub mod items;
pub mod pricing;

pub use categories::Category;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
