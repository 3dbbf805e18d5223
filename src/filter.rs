//! Listing filter criteria and the filter pipeline.
//!
//! Holds the three user-controlled criteria (search text, category pill and
//! rating floor) and derives the visible listings from them.

use crate::listing::Property;

/// Category pill labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TopVilla,
    SelfChecking,
    Beachfront,
    Pool,
    FreeWifi,
    Restaurant,
}

impl Category {
    /// All categories in pill order.
    pub const ALL: [Category; 6] = [
        Category::TopVilla,
        Category::SelfChecking,
        Category::Beachfront,
        Category::Pool,
        Category::FreeWifi,
        Category::Restaurant,
    ];

    /// Get the pill label.
    ///
    /// # Returns
    /// * `&'static str` - Label as shown on the pill
    pub fn label(self) -> &'static str {
        match self {
            Category::TopVilla => "Top Villa",
            Category::SelfChecking => "Self Checking",
            Category::Beachfront => "Beachfront",
            Category::Pool => "Pool",
            Category::FreeWifi => "Free Wifi",
            Category::Restaurant => "Restaurant",
        }
    }

    /// Get the category at a pill position.
    ///
    /// # Arguments
    /// * `index` - Zero-based pill position
    ///
    /// # Returns
    /// * `Option<Category>` - Category or None if out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Minimum rating options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingThreshold {
    /// No rating constraint
    #[default]
    Any,
    /// 4.0 and above
    Four,
    /// 4.5 and above
    FourHalf,
    /// 4.8 and above
    FourEight,
}

impl RatingThreshold {
    /// All options in selector order.
    #[allow(dead_code)] // Selector order is driven by next/previous
    pub const ALL: [RatingThreshold; 4] = [
        RatingThreshold::Any,
        RatingThreshold::Four,
        RatingThreshold::FourHalf,
        RatingThreshold::FourEight,
    ];

    /// Numeric floor; `Any` is 0.
    pub fn value(self) -> f64 {
        match self {
            RatingThreshold::Any => 0.0,
            RatingThreshold::Four => 4.0,
            RatingThreshold::FourHalf => 4.5,
            RatingThreshold::FourEight => 4.8,
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            RatingThreshold::Any => "Any rating",
            RatingThreshold::Four => "4.0+",
            RatingThreshold::FourHalf => "4.5+",
            RatingThreshold::FourEight => "4.8+",
        }
    }

    /// Whether this option constrains anything.
    pub fn is_active(self) -> bool {
        self != RatingThreshold::Any
    }

    /// Next option, wrapping from 4.8+ back to Any.
    pub fn next(self) -> Self {
        match self {
            RatingThreshold::Any => RatingThreshold::Four,
            RatingThreshold::Four => RatingThreshold::FourHalf,
            RatingThreshold::FourHalf => RatingThreshold::FourEight,
            RatingThreshold::FourEight => RatingThreshold::Any,
        }
    }

    /// Previous option, wrapping from Any to 4.8+.
    pub fn previous(self) -> Self {
        match self {
            RatingThreshold::Any => RatingThreshold::FourEight,
            RatingThreshold::Four => RatingThreshold::Any,
            RatingThreshold::FourHalf => RatingThreshold::Four,
            RatingThreshold::FourEight => RatingThreshold::FourHalf,
        }
    }
}

/// Current filter criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text search over name, city and state
    pub search: String,
    /// Minimum rating
    pub min_rating: RatingThreshold,
    /// Selected category pill
    pub active: Option<Category>,
}

impl FilterCriteria {
    /// Normalized search query.
    ///
    /// # Returns
    /// * `Option<String>` - Trimmed, lower-cased query, or None when blank
    pub fn search_query(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search_query().is_none() && self.active.is_none() && !self.min_rating.is_active()
    }

    /// Check a single property against every active criterion.
    ///
    /// # Arguments
    /// * `property` - Property to check
    ///
    /// # Returns
    /// * `bool` - True if the property passes all active filters
    #[allow(dead_code)] // Per-property check; the pipeline narrows whole lists
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(query) = self.search_query()
            && !matches_search(property, &query)
        {
            return false;
        }
        if let Some(category) = self.active
            && !matches_category(property, &category.label().to_lowercase())
        {
            return false;
        }
        !self.min_rating.is_active() || meets_rating(property, self.min_rating.value())
    }
}

/// Toggle a category pill.
///
/// # Arguments
/// * `active` - Currently active category
/// * `clicked` - Category that was clicked
///
/// # Returns
/// * `Option<Category>` - None if `clicked` was active, otherwise `clicked`
pub fn toggle_category(active: Option<Category>, clicked: Category) -> Option<Category> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Apply filter criteria to a property list.
///
/// # Arguments
/// * `source` - All properties
/// * `criteria` - Filter criteria
///
/// # Returns
/// * `Vec<&Property>` - Matching properties in source order
///
/// # Details
/// Narrows the list in sequence, skipping inactive criteria:
/// - Search query (name, city, state)
/// - Category pill (substring of the space-joined tags)
/// - Rating floor
pub fn apply_filters<'a>(source: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    let mut filtered: Vec<&Property> = source.iter().collect();

    if let Some(query) = criteria.search_query() {
        filtered.retain(|property| matches_search(property, &query));
    }

    if let Some(category) = criteria.active {
        let key = category.label().to_lowercase();
        filtered.retain(|property| matches_category(property, &key));
    }

    if criteria.min_rating.is_active() {
        let floor = criteria.min_rating.value();
        filtered.retain(|property| meets_rating(property, floor));
    }

    filtered
}

/// `query` must already be lower-cased.
fn matches_search(property: &Property, query: &str) -> bool {
    property.name.to_lowercase().contains(query)
        || property.address.city.to_lowercase().contains(query)
        || property.address.state.to_lowercase().contains(query)
}

/// Substring test against the joined tags, so a label spanning two
/// adjacent tags also matches.
fn matches_category(property: &Property, key: &str) -> bool {
    property.joined_tags().to_lowercase().contains(key)
}

fn meets_rating(property: &Property, floor: f64) -> bool {
    property.rating >= floor
}
