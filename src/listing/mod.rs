//! Property listing data.
//!
//! Provides the listing models and the compiled-in sample dataset.

pub mod models;
pub mod sample;

pub use models::Property;
pub use sample::{ListingError, load_sample};
