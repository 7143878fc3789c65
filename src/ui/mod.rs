//! UI rendering for the outbreak screens
//!
//! - Stats: header with page title and updated line, two-column card grid,
//!   key hints
//! - Search: filterable country list
//! - Error: terminal failure screen with retry

mod card;
mod error_screen;
mod search;
mod stats;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    indicator_color, COLOR_ACCENT, COLOR_BORDER, COLOR_CAUTION, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_NEUTRAL, COLOR_POSITIVE, COLOR_SEVERE,
};

use ratatui::Frame;

use crate::app::{App, Screen};
use error_screen::render_error_screen;
use search::render_search_screen;
use stats::render_stats_screen;

/// Render the active screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Stats => render_stats_screen(frame, app),
        Screen::Search => render_search_screen(frame, app),
        Screen::Error => render_error_screen(frame, app),
    }
}
