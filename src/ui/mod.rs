//! UI components module.
//!
//! Contains ratatui widgets for displaying the listing screen.

pub mod filters;
pub mod grid;
pub mod hero;
pub mod layout;
pub mod search;

pub use filters::{render_pills, render_rating};
pub use grid::{GridGeometry, render_grid};
pub use hero::render_hero;
pub use layout::ScreenLayout;
pub use search::render_search;
