//! Pricing module - resale price recommendation from comps.

mod pricing_model;
mod pricing_service;

pub use pricing_model::{Recommendation, NO_PRICED_COMPS_NOTE};
pub use pricing_service::{mean, median, recommend};
