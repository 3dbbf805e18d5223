//! Listings TUI - Terminal User Interface for browsing property listings.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod filter;
mod listing;
mod logging;
mod terminal;
mod ui;

use anyhow::Context;
use app::{App, UiMode};
use config::Config;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    text::Line,
    widgets::{Paragraph, Widget},
};
use std::time::Duration;
use terminal::{TerminalGuard, Tui};
use ui::{GridGeometry, ScreenLayout};

const HELP_TEXT: &str =
    "q quit | / search | f categories | 1-6 toggle category | r/R rating | c clear | arrows move";

/// Main application entry point.
///
/// # Details
/// Loads configuration, starts logging, loads the sample listings, then runs
/// the event loop until the user quits.
fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    logging::init(&config)?;

    let properties = listing::load_sample().context("Failed to load property listings")?;
    tracing::info!(count = properties.len(), "loaded sample listings");

    let mut app = App::new(&properties);
    app.set_status(format!("Loaded {} properties", properties.len()));

    let (guard, mut terminal) = TerminalGuard::enter(config.mouse)?;
    let result = run_app(&mut terminal, &mut app, &config);
    drop(terminal);
    drop(guard);

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!("exiting");
    result
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
/// * `layout` - Screen layout for this frame
fn render_ui(f: &mut ratatui::Frame, app: &App, layout: &ScreenLayout) {
    let buf = f.buffer_mut();

    if let Some(hero) = layout.hero {
        ui::render_hero(hero, buf);
    }
    ui::render_pills(app, layout.pills, buf);
    ui::render_search(app, layout.search, buf);
    ui::render_rating(app, layout.rating, buf);
    ui::render_grid(app, layout.grid, buf);

    let status_text = app.status_message.as_deref().unwrap_or(HELP_TEXT);
    Widget::render(Paragraph::new(Line::from(status_text)), layout.status, buf);
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `config` - Configuration
///
/// # Details
/// Redraws, then waits up to 100 ms for a key or mouse event.
fn run_app(terminal: &mut Tui, app: &mut App, config: &Config) -> anyhow::Result<()> {
    // Updated on each render, used for mouse hit-testing
    let mut layout = ScreenLayout::default();

    loop {
        terminal.draw(|f| {
            layout = ScreenLayout::new(f.area(), config.show_hero);
            let geometry = GridGeometry::new(layout.grid, app.filtered.len(), app.selected_index);
            app.set_columns(geometry.columns);
            render_ui(f, app, &layout);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(app, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, &layout),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handle a key press.
///
/// # Arguments
/// * `app` - Application state
/// * `key` - Key event
///
/// # Returns
/// * `bool` - True if the application should quit
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    // A status message lasts until the next key press
    app.clear_status();

    match app.mode {
        UiMode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Left | KeyCode::Char('h') => app.move_left(),
            KeyCode::Right | KeyCode::Char('l') => app.move_right(),
            KeyCode::Char('/') => app.mode = UiMode::Search,
            KeyCode::Char('f') => app.mode = UiMode::Filters,
            KeyCode::Char('r') => app.cycle_rating_up(),
            KeyCode::Char('R') => app.cycle_rating_down(),
            KeyCode::Char('c') => app.clear_filters(),
            KeyCode::Char(digit @ '1'..='9') => {
                if let Some(index) = digit.to_digit(10) {
                    app.toggle_category_at(index as usize - 1);
                }
            }
            KeyCode::Enter => {
                let summary = app.selected_property().map(|property| property.summary());
                if let Some(summary) = summary {
                    app.set_status(summary);
                }
            }
            _ => {}
        },
        UiMode::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.mode = UiMode::Browse,
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_search()
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.add_search_char(c)
            }
            _ => {}
        },
        UiMode::Filters => match key.code {
            KeyCode::Esc | KeyCode::Char('f') => app.mode = UiMode::Browse,
            KeyCode::Left | KeyCode::Char('h') => app.pill_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => app.pill_cursor_right(),
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_pill_at_cursor(),
            KeyCode::Char('r') => app.cycle_rating_up(),
            KeyCode::Char('R') => app.cycle_rating_down(),
            _ => {}
        },
    }

    false
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `layout` - Layout of the last rendered frame
///
/// # Details
/// Left click toggles a pill, cycles the rating selector, focuses the search
/// box or selects a card. Scrolling moves the selection by one row.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, layout: &ScreenLayout) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(category) = ui::filters::pill_at(layout.pills, column, row) {
                app.toggle_category(category);
            } else if ui::layout::contains(layout.rating, column, row) {
                app.cycle_rating_up();
            } else if ui::layout::contains(layout.search, column, row) {
                app.mode = UiMode::Search;
            } else if ui::layout::contains(layout.grid, column, row) {
                let geometry =
                    GridGeometry::new(layout.grid, app.filtered.len(), app.selected_index);
                if let Some(index) = geometry.index_at(app.filtered.len(), column, row) {
                    app.select(index);
                    app.mode = UiMode::Browse;
                }
            }
        }
        _ => {}
    }
}
