//! Compiled-in sample dataset.
//!
//! The listings ship inside the binary as JSON and are parsed once at startup.

use super::models::Property;
use std::collections::HashSet;
use thiserror::Error;

/// Sample listings embedded at build time.
const SAMPLE_LISTINGS: &str = include_str!("../../data/listings.json");

/// Errors raised while loading a listing dataset.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The dataset is not valid listing JSON
    #[error("failed to parse listings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two properties share a name
    #[error("duplicate property name: {0}")]
    DuplicateName(String),
    /// A rating falls outside 0.0..=5.0
    #[error("rating {rating} of '{name}' is outside 0.0-5.0")]
    RatingOutOfRange { name: String, rating: f64 },
}

/// Load the compiled-in sample listings.
///
/// # Returns
/// * `Result<Vec<Property>, ListingError>` - Listings in dataset order
pub fn load_sample() -> Result<Vec<Property>, ListingError> {
    parse_listings(SAMPLE_LISTINGS)
}

/// Parse and validate a JSON array of listings.
///
/// # Arguments
/// * `json` - JSON array of property records
///
/// # Returns
/// * `Result<Vec<Property>, ListingError>` - Listings in input order
///
/// # Details
/// Names must be unique and ratings must lie within 0.0 to 5.0.
pub fn parse_listings(json: &str) -> Result<Vec<Property>, ListingError> {
    let properties: Vec<Property> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for property in &properties {
        if !seen.insert(property.name.as_str()) {
            return Err(ListingError::DuplicateName(property.name.clone()));
        }
        if !(0.0..=5.0).contains(&property.rating) {
            return Err(ListingError::RatingOutOfRange {
                name: property.name.clone(),
                rating: property.rating,
            });
        }
    }

    tracing::debug!(count = properties.len(), "parsed listings");
    Ok(properties)
}
