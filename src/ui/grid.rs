//! Property grid rendering.
//!
//! Displays the filtered listings as a responsive grid of cards, or a
//! fallback message when nothing matches.

use crate::app::App;
use crate::listing::Property;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Card height: six content lines plus borders.
pub const CARD_HEIGHT: u16 = 8;

/// Shown instead of the grid when no property passes the filters.
pub const NO_MATCHES: &str = "No properties match your filters.";

/// Number of card columns for a given inner grid width.
///
/// # Details
/// Breakpoints: < 60 -> 1, < 90 -> 2, < 120 -> 3, otherwise 4.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..60 => 1,
        60..90 => 2,
        90..120 => 3,
        _ => 4,
    }
}

/// Placement of cards inside the grid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Area inside the grid borders
    pub inner: Rect,
    /// Cards per row
    pub columns: usize,
    /// Width of one card
    pub card_width: u16,
    /// Rows that fit on screen
    pub visible_rows: usize,
    /// First row on screen
    pub first_row: usize,
}

impl GridGeometry {
    /// Compute the grid placement.
    ///
    /// # Arguments
    /// * `area` - Area of the grid block (including borders)
    /// * `item_count` - Number of cards
    /// * `selected` - Selected card index
    ///
    /// # Returns
    /// * `GridGeometry` - Placement scrolled so the selected row is centered
    ///   where possible
    pub fn new(area: Rect, item_count: usize, selected: usize) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let columns = columns_for_width(inner.width);
        let card_width = inner.width / columns as u16;
        let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;

        let total_rows = item_count.div_ceil(columns);
        let selected_row = selected / columns;
        let max_scroll = total_rows.saturating_sub(visible_rows);
        let first_row = selected_row.saturating_sub(visible_rows / 2).min(max_scroll);

        Self {
            inner,
            columns,
            card_width,
            visible_rows,
            first_row,
        }
    }

    /// Area of a card, if its row is on screen.
    ///
    /// # Arguments
    /// * `index` - Card index
    ///
    /// # Returns
    /// * `Option<Rect>` - Card area, clipped to the grid
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        let row = index / self.columns;
        let column = index % self.columns;
        if row < self.first_row || row >= self.first_row + self.visible_rows {
            return None;
        }

        let y = self.inner.y + (row - self.first_row) as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(self.inner.bottom().saturating_sub(y));
        if height == 0 || self.card_width == 0 {
            return None;
        }
        let x = self.inner.x + column as u16 * self.card_width;
        Some(Rect::new(x, y, self.card_width, height))
    }

    /// Find the card under a terminal cell.
    ///
    /// # Arguments
    /// * `item_count` - Number of cards
    /// * `column` - Terminal column
    /// * `row` - Terminal row
    ///
    /// # Returns
    /// * `Option<usize>` - Card index, if a visible card covers the cell
    pub fn index_at(&self, item_count: usize, column: u16, row: u16) -> Option<usize> {
        if self.card_width == 0 || !super::layout::contains(self.inner, column, row) {
            return None;
        }
        let grid_column = ((column - self.inner.x) / self.card_width) as usize;
        if grid_column >= self.columns {
            return None;
        }
        let grid_row = self.first_row + ((row - self.inner.y) / CARD_HEIGHT) as usize;
        let index = grid_row * self.columns + grid_column;
        (index < item_count && self.card_rect(index).is_some()).then_some(index)
    }
}

/// Render the property grid.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Cards flow left to right, top to bottom, in filtered order. The block title
/// shows visible/total counts. An empty result renders the no-matches message.
pub fn render_grid(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!("Properties ({}/{})", app.filtered.len(), app.total_count());
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.filtered.is_empty() {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(NO_MATCHES, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(block);
        Widget::render(message, area, buf);
        return;
    }

    let geometry = GridGeometry::new(area, app.filtered.len(), app.selected_index);
    Widget::render(block, area, buf);

    for (index, property) in app.filtered.iter().enumerate() {
        if let Some(rect) = geometry.card_rect(index) {
            render_card(property, index == app.selected_index, rect, buf);
        }
    }
}

/// Render a single property card.
///
/// # Details
/// - Title: property name (bold)
/// - Line 1: location
/// - Line 2: rating and nightly price
/// - Line 3: discount (blank when none)
/// - Line 4: beds, baths, guests
/// - Line 5: category tags
/// - Line 6: image location, as text
fn render_card(property: &Property, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let title_style = Style::default()
        .fg(if is_selected {
            Color::Yellow
        } else {
            Color::White
        })
        .add_modifier(Modifier::BOLD);
    let border_style = if is_selected {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let discount = property.format_discount().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            property.format_location(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(vec![
            Span::styled(
                format!("\u{2605} {}", property.format_rating()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(property.format_price(), Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(discount, Style::default().fg(Color::Magenta))),
        Line::from(Span::styled(
            property.format_offers(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            property.category.join(", "),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(
                "Image: {}",
                if property.image.is_empty() {
                    "-"
                } else {
                    property.image.as_str()
                }
            ),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(property.name.as_str(), title_style))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    Widget::render(card, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Vec<Property> {
        (0..count)
            .map(|i| Property::new(&format!("Home {}", i), "Miami", "Florida", 4.5, &["Pool"]))
            .collect()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_columns_for_width_breakpoints() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(59), 1);
        assert_eq!(columns_for_width(60), 2);
        assert_eq!(columns_for_width(89), 2);
        assert_eq!(columns_for_width(90), 3);
        assert_eq!(columns_for_width(119), 3);
        assert_eq!(columns_for_width(120), 4);
        assert_eq!(columns_for_width(300), 4);
    }

    #[test]
    fn test_geometry_places_cards_row_major() {
        // Inner area 98x28: 3 columns of 32, 3 rows
        let geometry = GridGeometry::new(Rect::new(0, 0, 100, 30), 10, 0);
        assert_eq!(geometry.columns, 3);
        assert_eq!(geometry.card_width, 32);
        assert_eq!(geometry.visible_rows, 3);
        assert_eq!(geometry.first_row, 0);
        assert_eq!(geometry.card_rect(0), Some(Rect::new(1, 1, 32, CARD_HEIGHT)));
        assert_eq!(geometry.card_rect(4), Some(Rect::new(33, 9, 32, CARD_HEIGHT)));
    }

    #[test]
    fn test_geometry_scrolls_to_selection() {
        // Inner height 16: two rows visible, one column
        let geometry = GridGeometry::new(Rect::new(0, 0, 40, 18), 10, 9);
        assert_eq!(geometry.visible_rows, 2);
        assert_eq!(geometry.first_row, 8);
        assert!(geometry.card_rect(7).is_none());
        assert!(geometry.card_rect(9).is_some());
    }

    #[test]
    fn test_index_at() {
        let area = Rect::new(0, 10, 100, 30);
        let geometry = GridGeometry::new(area, 5, 0);
        assert_eq!(geometry.index_at(5, 1, 11), Some(0));
        assert_eq!(geometry.index_at(5, 40, 11), Some(1));
        assert_eq!(geometry.index_at(5, 40, 19), Some(4));
        // Cell of a card slot with no property
        assert_eq!(geometry.index_at(5, 80, 19), None);
        // Border
        assert_eq!(geometry.index_at(5, 0, 11), None);
    }

    #[test]
    fn test_render_grid_empty_shows_message() {
        let source = sample(2);
        let mut app = App::new(&source);
        app.set_search("nowhere");

        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        render_grid(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains(NO_MATCHES));
        assert!(text.contains("Properties (0/2)"));
    }

    #[test]
    fn test_render_grid_shows_cards() {
        let source = sample(3);
        let app = App::new(&source);

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        render_grid(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Properties (3/3)"));
        assert!(text.contains("Home 0"));
        assert!(text.contains("Home 2"));
        assert!(text.contains("Miami, Florida"));
        assert!(!text.contains(NO_MATCHES));
        assert!(text.contains("Image: -"));
    }

    #[test]
    fn test_render_card_shows_image_as_text() {
        let mut source = sample(1);
        source[0].image = "img/home-0.jpg".to_string();
        let app = App::new(&source);

        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);
        render_grid(&app, area, &mut buf);
        assert!(buffer_text(&buf).contains("Image: img/home-0.jpg"));
    }
}
