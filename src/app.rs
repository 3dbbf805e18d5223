//! Application state management.
//!
//! Owns the filter criteria, the derived listing grid, selection and UI mode.

use crate::filter::{self, Category, FilterCriteria, RatingThreshold};
use crate::listing::Property;
use std::cmp;

/// Which control currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigating the property grid
    Browse,
    /// Typing into the search box
    Search,
    /// Moving between category pills
    Filters,
}

/// Main application state.
///
/// Borrows the source listings for its whole lifetime; the visible list is
/// re-derived from them whenever a criterion changes.
#[derive(Debug)]
pub struct App<'a> {
    /// All listings (read-only)
    source: &'a [Property],
    /// Listings passing the current criteria, in source order
    pub filtered: Vec<&'a Property>,
    /// Current filter criteria
    pub criteria: FilterCriteria,
    /// Selected card index (in filtered)
    pub selected_index: usize,
    /// Pill under the keyboard cursor in Filters mode
    pub pill_cursor: usize,
    /// Grid column count from the last render
    pub columns: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `source` - Listings to browse
    ///
    /// # Returns
    /// * `App` - State with default criteria and every listing visible
    pub fn new(source: &'a [Property]) -> Self {
        let mut app = Self {
            source,
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            selected_index: 0,
            pill_cursor: 0,
            columns: 1,
            mode: UiMode::Browse,
            status_message: None,
        };
        app.apply_filters();
        app
    }

    /// Number of listings before filtering.
    pub fn total_count(&self) -> usize {
        self.source.len()
    }

    /// Re-derive the visible listings from the current criteria.
    ///
    /// # Details
    /// Clamps the selection so it stays inside the new list.
    pub fn apply_filters(&mut self) {
        self.filtered = filter::apply_filters(self.source, &self.criteria);
        self.selected_index = cmp::min(self.selected_index, self.filtered.len().saturating_sub(1));
        tracing::debug!(
            search = %self.criteria.search,
            category = ?self.criteria.active,
            min_rating = self.criteria.min_rating.label(),
            visible = self.filtered.len(),
            "filters applied"
        );
    }

    /// Replace the search query.
    pub fn set_search(&mut self, query: &str) {
        self.criteria.search = query.to_string();
        self.apply_filters();
    }

    /// Add a character to the search query.
    ///
    /// # Arguments
    /// * `ch` - Character to add
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            self.criteria.search.push(ch);
            self.apply_filters();
        }
    }

    /// Remove last character from search query.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            self.criteria.search.pop();
            self.apply_filters();
        }
    }

    /// Clear search query.
    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    /// Toggle a category pill.
    ///
    /// # Arguments
    /// * `category` - Pill that was activated
    ///
    /// # Details
    /// Activating the active pill clears the category filter; any other pill
    /// replaces it.
    pub fn toggle_category(&mut self, category: Category) {
        self.criteria.active = filter::toggle_category(self.criteria.active, category);
        if let Some(index) = Category::ALL.iter().position(|c| *c == category) {
            self.pill_cursor = index;
        }
        self.apply_filters();
        match self.criteria.active {
            Some(active) => self.set_status(format!("Category: {}", active.label())),
            None => self.set_status("Category filter cleared".to_string()),
        }
    }

    /// Toggle the pill at a position, if there is one.
    pub fn toggle_category_at(&mut self, index: usize) {
        if let Some(category) = Category::from_index(index) {
            self.toggle_category(category);
        }
    }

    /// Toggle the pill under the cursor.
    pub fn toggle_pill_at_cursor(&mut self) {
        self.toggle_category_at(self.pill_cursor);
    }

    /// Move the pill cursor left, wrapping to the last pill.
    pub fn pill_cursor_left(&mut self) {
        let count = Category::ALL.len();
        self.pill_cursor = (self.pill_cursor + count - 1) % count;
    }

    /// Move the pill cursor right, wrapping to the first pill.
    pub fn pill_cursor_right(&mut self) {
        self.pill_cursor = (self.pill_cursor + 1) % Category::ALL.len();
    }

    /// Replace the minimum rating.
    pub fn set_min_rating(&mut self, rating: RatingThreshold) {
        self.criteria.min_rating = rating;
        self.apply_filters();
        self.set_status(format!("Minimum rating: {}", rating.label()));
    }

    /// Select the next rating option.
    pub fn cycle_rating_up(&mut self) {
        self.set_min_rating(self.criteria.min_rating.next());
    }

    /// Select the previous rating option.
    pub fn cycle_rating_down(&mut self) {
        self.set_min_rating(self.criteria.min_rating.previous());
    }

    /// Reset every criterion to its default.
    pub fn clear_filters(&mut self) {
        if self.criteria.is_empty() {
            self.set_status("No filters to clear".to_string());
            return;
        }
        self.criteria = FilterCriteria::default();
        self.apply_filters();
        self.set_status("Filters cleared".to_string());
    }

    /// Record the grid column count used by the last render.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// Move selection one card left.
    pub fn move_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection one card right, stopping at the last card.
    pub fn move_right(&mut self) {
        if self.selected_index + 1 < self.filtered.len() {
            self.selected_index += 1;
        }
    }

    /// Move selection one row up.
    pub fn move_up(&mut self) {
        if self.selected_index >= self.columns {
            self.selected_index -= self.columns;
        }
    }

    /// Move selection one row down.
    ///
    /// # Details
    /// On a short last row the selection lands on the last card.
    pub fn move_down(&mut self) {
        let len = self.filtered.len();
        let current_row = self.selected_index / self.columns;
        let last_row = len.saturating_sub(1) / self.columns;
        if len > 0 && current_row < last_row {
            self.selected_index = cmp::min(self.selected_index + self.columns, len - 1);
        }
    }

    /// Select a card by index, ignoring indices past the end.
    pub fn select(&mut self, index: usize) {
        if index < self.filtered.len() {
            self.selected_index = index;
        }
    }

    /// Get the currently selected property.
    ///
    /// # Returns
    /// * `Option<&Property>` - Selected property or None if nothing matches
    pub fn selected_property(&self) -> Option<&'a Property> {
        self.filtered.get(self.selected_index).copied()
    }

    /// Set status message.
    ///
    /// # Arguments
    /// * `message` - Status message to display
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Property> {
        vec![
            Property::new("Ocean Breeze", "Miami", "Florida", 4.6, &["Beachfront", "Pool"]),
            Property::new("City Lodge", "Denver", "Colorado", 4.2, &["Self Checking"]),
            Property::new("Desert Villa", "Phoenix", "Arizona", 4.85, &["Top Villa", "Pool"]),
            Property::new("Harbor Inn", "Portland", "Maine", 3.9, &["Restaurant"]),
            Property::new("Pine Cabin", "Aspen", "Colorado", 4.5, &["Free Wifi"]),
        ]
    }

    #[test]
    fn test_app_new_shows_everything() {
        let source = sample();
        let app = App::new(&source);
        assert_eq!(app.filtered.len(), 5);
        assert_eq!(app.total_count(), 5);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.mode, UiMode::Browse);
        assert!(app.criteria.is_empty());
    }

    #[test]
    fn test_app_search_typing() {
        let source = sample();
        let mut app = App::new(&source);
        app.mode = UiMode::Search;
        for ch in "colo".chars() {
            app.add_search_char(ch);
        }
        assert_eq!(app.filtered.len(), 2);
        app.remove_search_char();
        app.remove_search_char();
        app.remove_search_char();
        // "c" matches Ocean Breeze, City Lodge, Pine Cabin (Colorado)
        assert_eq!(app.filtered.len(), 3);
        app.clear_search();
        assert_eq!(app.filtered.len(), 5);
    }

    #[test]
    fn test_app_search_ignored_outside_search_mode() {
        let source = sample();
        let mut app = App::new(&source);
        app.add_search_char('x');
        assert!(app.criteria.search.is_empty());
        assert_eq!(app.filtered.len(), 5);
    }

    #[test]
    fn test_app_toggle_category_twice_restores_list() {
        let source = sample();
        let mut app = App::new(&source);
        app.toggle_category(Category::Pool);
        assert_eq!(app.filtered.len(), 2);
        assert_eq!(app.pill_cursor, 3);
        app.toggle_category(Category::Pool);
        assert_eq!(app.criteria.active, None);
        assert_eq!(app.filtered.len(), 5);
    }

    #[test]
    fn test_app_toggle_category_at_out_of_range() {
        let source = sample();
        let mut app = App::new(&source);
        app.toggle_category_at(42);
        assert_eq!(app.criteria.active, None);
    }

    #[test]
    fn test_app_pill_cursor_wraps() {
        let source = sample();
        let mut app = App::new(&source);
        app.pill_cursor_left();
        assert_eq!(app.pill_cursor, Category::ALL.len() - 1);
        app.pill_cursor_right();
        assert_eq!(app.pill_cursor, 0);
        app.pill_cursor_right();
        app.toggle_pill_at_cursor();
        assert_eq!(app.criteria.active, Some(Category::SelfChecking));
    }

    #[test]
    fn test_app_rating_cycle_filters() {
        let source = sample();
        let mut app = App::new(&source);
        app.cycle_rating_up();
        assert_eq!(app.criteria.min_rating, RatingThreshold::Four);
        assert_eq!(app.filtered.len(), 4);
        app.cycle_rating_up();
        assert_eq!(app.filtered.len(), 3);
        app.cycle_rating_up();
        assert_eq!(app.filtered.len(), 1);
        app.cycle_rating_down();
        app.cycle_rating_down();
        app.cycle_rating_down();
        assert_eq!(app.criteria.min_rating, RatingThreshold::Any);
        assert_eq!(app.filtered.len(), 5);
    }

    #[test]
    fn test_app_selection_clamped_when_list_shrinks() {
        let source = sample();
        let mut app = App::new(&source);
        app.select(4);
        assert_eq!(app.selected_index, 4);
        app.set_min_rating(RatingThreshold::FourHalf);
        assert_eq!(app.filtered.len(), 3);
        assert_eq!(app.selected_index, 2);
        app.set_search("nowhere");
        assert!(app.filtered.is_empty());
        assert_eq!(app.selected_index, 0);
        assert!(app.selected_property().is_none());
    }

    #[test]
    fn test_app_grid_navigation() {
        let source = sample();
        let mut app = App::new(&source);
        app.set_columns(2);

        app.move_right();
        assert_eq!(app.selected_index, 1);
        app.move_down();
        assert_eq!(app.selected_index, 3);
        // Short last row: land on the last card
        app.move_down();
        assert_eq!(app.selected_index, 4);
        app.move_down();
        assert_eq!(app.selected_index, 4);
        app.move_right();
        assert_eq!(app.selected_index, 4);
        app.move_up();
        assert_eq!(app.selected_index, 2);
        app.move_left();
        app.move_left();
        app.move_left();
        assert_eq!(app.selected_index, 0);
        app.move_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_app_navigation_on_empty_list() {
        let source = sample();
        let mut app = App::new(&source);
        app.set_search("nowhere");
        app.move_down();
        app.move_right();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_app_clear_filters() {
        let source = sample();
        let mut app = App::new(&source);
        app.set_search("miami");
        app.toggle_category(Category::Beachfront);
        app.set_min_rating(RatingThreshold::Four);
        assert_eq!(app.filtered.len(), 1);
        app.clear_filters();
        assert!(app.criteria.is_empty());
        assert_eq!(app.filtered.len(), 5);
    }

    #[test]
    fn test_app_selected_property() {
        let source = sample();
        let mut app = App::new(&source);
        app.select(2);
        assert_eq!(app.selected_property().map(|p| p.name.as_str()), Some("Desert Villa"));
        app.select(10);
        assert_eq!(app.selected_index, 2);
    }
}
