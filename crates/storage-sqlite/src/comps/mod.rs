//! SQLite storage implementation for per-item comps.

mod model;
mod repository;

pub use model::{CompDB, NewCompDB};
pub use repository::CompRepository;
