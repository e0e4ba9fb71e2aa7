//! SQLite storage implementation for items.

mod model;
mod repository;

pub use model::{ItemDB, NewItemDB};
pub use repository::ItemRepository;
