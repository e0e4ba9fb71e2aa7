//! FurnFlip Comps Crate
//!
//! Fetches comparable listings ("comps") for a furniture item from a
//! pluggable source. Two sources ship with the crate:
//!
//! - [`DemoProvider`]: a fixed list of four priced listings, no network.
//! - [`GoogleSearchProvider`]: Google Custom Search JSON API, with prices
//!   scraped from result snippets by [`parse_price`].
//!
//! ```text
//! CompQuery ──> CompProvider ──> Vec<CompListing>
//! ```

pub mod errors;
pub mod models;
pub mod price;
pub mod provider;

pub use errors::CompsError;
pub use models::{CompListing, CompQuery, DEFAULT_CATEGORY};
pub use price::parse_price;
pub use provider::demo::DemoProvider;
pub use provider::google::{GoogleCredentials, GoogleSearchProvider, MISSING_CREDENTIALS_TITLE};
pub use provider::CompProvider;
