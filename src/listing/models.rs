//! Property listing models.
//!
//! Contains the records shown on the listing screen: properties, their
//! addresses and what they offer.

use serde::{Deserialize, Serialize};

/// Represents a single listable property.
///
/// Properties are read-only once loaded; the filter pipeline only ever
/// borrows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    /// Property name (unique within a dataset)
    pub name: String,
    /// Where the property is located
    pub address: Address,
    /// Guest rating, 0.0 to 5.0
    pub rating: f64,
    /// Category tags, in display order
    pub category: Vec<String>,
    /// Price per night in whole currency units
    #[serde(default)]
    pub price: u32,
    /// Beds, showers and occupancy
    #[serde(default)]
    pub offers: Offers,
    /// Image URL or path
    #[serde(default)]
    pub image: String,
    /// Discount in percent, empty when there is none
    #[serde(default)]
    pub discount: String,
}

/// Property address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// State, province or region
    pub state: String,
    /// City
    pub city: String,
    /// Country
    #[serde(default)]
    pub country: String,
}

/// What a property offers its guests.
///
/// Values are kept as display strings since listings use ranges such as `"4-6"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Offers {
    pub bed: String,
    pub shower: String,
    pub occupants: String,
}

impl Property {
    /// Create a property with the fields the filter pipeline looks at.
    ///
    /// # Arguments
    /// * `name` - Property name
    /// * `city` - City
    /// * `state` - State or region
    /// * `rating` - Guest rating
    /// * `category` - Category tags
    ///
    /// # Returns
    /// * `Property` - New property with empty card details
    #[allow(dead_code)] // Listings normally come from the dataset; used to build fixtures
    pub fn new(name: &str, city: &str, state: &str, rating: f64, category: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            address: Address {
                state: state.to_string(),
                city: city.to_string(),
                country: String::new(),
            },
            rating,
            category: category.iter().map(|tag| (*tag).to_string()).collect(),
            price: 0,
            offers: Offers::default(),
            image: String::new(),
            discount: String::new(),
        }
    }

    /// Category tags joined by a single space.
    pub fn joined_tags(&self) -> String {
        self.category.join(" ")
    }

    /// Format the location as `city, state, country`.
    ///
    /// # Returns
    /// * `String` - Location with empty parts left out
    pub fn format_location(&self) -> String {
        [
            self.address.city.as_str(),
            self.address.state.as_str(),
            self.address.country.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Format the rating with two decimals.
    pub fn format_rating(&self) -> String {
        format!("{:.2}", self.rating)
    }

    /// Format the nightly price with thousands separators.
    ///
    /// # Returns
    /// * `String` - Formatted price (e.g., "$3,200/night")
    pub fn format_price(&self) -> String {
        let digits = self.price.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("${}/night", grouped)
    }

    /// Format the discount, if the property has one.
    ///
    /// # Returns
    /// * `Option<String>` - Discount label (e.g., "30% off") or None
    pub fn format_discount(&self) -> Option<String> {
        let discount = self.discount.trim();
        if discount.is_empty() {
            None
        } else {
            Some(format!("{}% off", discount))
        }
    }

    /// Format the offers as a single line.
    pub fn format_offers(&self) -> String {
        format!(
            "Beds {} | Baths {} | Guests {}",
            or_dash(&self.offers.bed),
            or_dash(&self.offers.shower),
            or_dash(&self.offers.occupants)
        )
    }

    /// One-line summary used by the status bar.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} | rating {} | {}",
            self.name,
            self.format_location(),
            self.format_rating(),
            self.format_price()
        )
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
