//! Filter controls rendering.
//!
//! Displays the category pills and the minimum rating selector.

use crate::app::{App, UiMode};
use crate::filter::Category;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Columns between two pills.
const PILL_GAP: u16 = 1;

fn block_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Text drawn for a pill.
fn pill_text(category: Category) -> String {
    format!("( {} )", category.label())
}

/// Lay pills out left to right, wrapping onto a new line when the next pill
/// doesn't fit.
///
/// # Arguments
/// * `width` - Width available for pills
///
/// # Returns
/// * `Vec<(Category, u16, u16, u16)>` - Category, column offset, line offset and width
///
/// # Details
/// A pill wider than `width` gets a line of its own and is cut to fit.
fn wrap_pills(width: u16) -> Vec<(Category, u16, u16, u16)> {
    if width == 0 {
        return Vec::new();
    }

    let mut placed = Vec::with_capacity(Category::ALL.len());
    let (mut x, mut y) = (0u16, 0u16);
    for category in Category::ALL {
        let pill_width = (pill_text(category).len() as u16).min(width);
        if x > 0 && x + pill_width > width {
            x = 0;
            y += 1;
        }
        placed.push((category, x, y, pill_width));
        x = x.saturating_add(pill_width + PILL_GAP);
    }
    placed
}

/// Number of lines the pills need when wrapped to `width`.
pub fn pill_lines(width: u16) -> u16 {
    wrap_pills(width)
        .last()
        .map(|(_, _, y, _)| y + 1)
        .unwrap_or(1)
}

/// Compute where each pill sits inside the pills block.
///
/// # Arguments
/// * `area` - Area of the pills block (including borders)
///
/// # Returns
/// * `Vec<(Category, Rect)>` - One-line rect for every pill, in pill order
///
/// # Details
/// Pills wrap onto further lines like the row of a flex container.
/// `ScreenLayout` sizes the block from `pill_lines`, so every line is inside it.
pub fn pill_areas(area: Rect) -> Vec<(Category, Rect)> {
    let inner = block_inner(area);
    wrap_pills(inner.width)
        .into_iter()
        .map(|(category, x, y, width)| {
            (category, Rect::new(inner.x + x, inner.y + y, width, 1))
        })
        .collect()
}

/// Find the pill under a terminal cell.
///
/// # Arguments
/// * `area` - Area of the pills block
/// * `column` - Clicked column
/// * `row` - Clicked row
///
/// # Returns
/// * `Option<Category>` - Pill at that cell, if any
pub fn pill_at(area: Rect, column: u16, row: u16) -> Option<Category> {
    let inner = block_inner(area);
    if !super::layout::contains(inner, column, row) {
        return None;
    }
    pill_areas(area)
        .into_iter()
        .find(|(_, rect)| super::layout::contains(*rect, column, row))
        .map(|(category, _)| category)
}

/// Render the category pills.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// The active pill is filled; in Filters mode the pill under the cursor is
/// underlined.
pub fn render_pills(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Filters;

    let block = Block::default()
        .title(if is_active {
            "Categories (ACTIVE - \u{2190}/\u{2192} move, Space toggle, Esc exit)"
        } else {
            "Categories (press 'f' or 1-6)"
        })
        .borders(Borders::ALL)
        .style(if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    Widget::render(block, area, buf);

    let inner = block_inner(area);
    for (index, (category, rect)) in pill_areas(area).into_iter().enumerate() {
        if rect.y >= inner.bottom() {
            continue;
        }
        let selected = app.criteria.active == Some(category);
        let mut style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_active && index == app.pill_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        Widget::render(Line::from(Span::styled(pill_text(category), style)), rect, buf);
    }
}

/// Render the minimum rating selector.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_rating(app: &App, area: Rect, buf: &mut Buffer) {
    let rating = app.criteria.min_rating;
    let line = Line::from(vec![
        Span::styled("\u{25c0} ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            rating.label(),
            Style::default()
                .fg(if rating.is_active() {
                    Color::Yellow
                } else {
                    Color::Gray
                })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{25b6}", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Min rating (r)").borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
