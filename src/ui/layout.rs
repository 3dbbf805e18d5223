//! Screen layout.
//!
//! Shared by rendering and mouse hit-testing so both agree on where each
//! control sits.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Hero banner height (two text lines plus borders).
pub const HERO_HEIGHT: u16 = 4;
/// Width of the rating selector next to the search box.
pub const RATING_WIDTH: u16 = 22;

/// Areas of every control on the listing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub hero: Option<Rect>,
    pub pills: Rect,
    pub search: Rect,
    pub rating: Rect,
    pub grid: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    /// Split the terminal area.
    ///
    /// # Arguments
    /// * `area` - Full terminal area
    /// * `show_hero` - Whether to reserve space for the hero banner
    ///
    /// # Returns
    /// * `ScreenLayout` - Hero, pills row, search + rating row, grid, status line
    ///
    /// # Details
    /// The pills row grows by one line for every line the pills wrap onto.
    pub fn new(area: Rect, show_hero: bool) -> Self {
        let hero_height = if show_hero { HERO_HEIGHT } else { 0 };
        let pills_height = super::filters::pill_lines(area.width.saturating_sub(2)) + 2;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(hero_height),  // Hero
                Constraint::Length(pills_height), // Category pills
                Constraint::Length(3),            // Search + rating
                Constraint::Min(0),               // Property grid
                Constraint::Length(1),            // Status bar
            ])
            .split(area);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(RATING_WIDTH)])
            .split(rows[2]);

        Self {
            hero: show_hero.then_some(rows[0]),
            pills: rows[1],
            search: controls[0],
            rating: controls[1],
            grid: rows[3],
            status: rows[4],
        }
    }
}

/// Check whether a terminal cell lies inside an area.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_hero() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 40), true);
        let hero = layout.hero.unwrap();
        assert_eq!(hero.height, HERO_HEIGHT);
        assert_eq!(layout.pills.y, HERO_HEIGHT);
        assert_eq!(layout.search.y, layout.rating.y);
        assert_eq!(layout.rating.width, RATING_WIDTH);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.grid.height, 40 - HERO_HEIGHT - 3 - 3 - 1);
    }

    #[test]
    fn test_layout_pills_row_grows_on_narrow_terminal() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.pills.height, 4);
        assert_eq!(layout.search.y, HERO_HEIGHT + 4);
        let pills = crate::ui::filters::pill_areas(layout.pills);
        assert_eq!(pills.len(), 6);
        assert!(pills.iter().all(|(_, rect)| contains(layout.pills, rect.x, rect.y)));
    }

    #[test]
    fn test_layout_without_hero() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 40), false);
        assert!(layout.hero.is_none());
        assert_eq!(layout.pills.y, 0);
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(contains(area, 2, 3));
        assert!(contains(area, 5, 4));
        assert!(!contains(area, 6, 4));
        assert!(!contains(area, 2, 5));
        assert!(!contains(area, 1, 3));
    }
}
