//! SQLite storage implementation for FurnFlip.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the store traits defined in `furnflip-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor that serializes all mutations
//! - Repository implementations for items and their comps
//!
//! Items and comps are stored as opaque JSON payloads keyed by an
//! autoincrement id; comps reference their item by foreign key.
//!
//! ```text
//!   core (domain, traits)
//!            │
//!            ▼
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod comps;
pub mod items;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from furnflip-core for convenience
pub use furnflip_core::errors::{DatabaseError, Error, Result};
