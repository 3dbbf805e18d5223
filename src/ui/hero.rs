//! Hero banner rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const HERO_TITLE: &str = "Find your favorite place here!";
pub const HERO_TAGLINE: &str = "The best prices for over 2 million properties worldwide.";

/// Render the hero banner.
///
/// # Arguments
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_hero(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO_TAGLINE, Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    Widget::render(paragraph, area, buf);
}
