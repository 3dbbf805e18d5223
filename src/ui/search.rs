//! Search widget rendering.
//!
//! Displays the search input bar.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in the empty, unfocused search box.
pub const SEARCH_PLACEHOLDER: &str = "Search name, city or state";

/// Render the search widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays a search input bar with the current query, or a placeholder when
/// the query is empty and the box is not focused. Highlights when in search mode.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Search;
    let prompt = if is_active {
        "Search: "
    } else {
        "Search (press '/'): "
    };

    let query = if app.criteria.search.is_empty() && !is_active {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            app.criteria.search.as_str(),
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        )
    };

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        query,
        Span::styled(
            if is_active { "_" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(if is_active {
                "Search (Enter/Esc to finish, Ctrl+U to clear)"
            } else {
                "Search"
            })
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Property;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_search_placeholder() {
        let source: Vec<Property> = Vec::new();
        let app = App::new(&source);
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        render_search(&app, area, &mut buf);
        assert!(row_text(&buf, 1).contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn test_render_search_query_with_cursor() {
        let source: Vec<Property> = Vec::new();
        let mut app = App::new(&source);
        app.mode = UiMode::Search;
        app.add_search_char('m');
        app.add_search_char('i');
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        render_search(&app, area, &mut buf);
        let row = row_text(&buf, 1);
        assert!(row.contains("Search: mi_"));
        assert!(!row.contains(SEARCH_PLACEHOLDER));
    }
}
