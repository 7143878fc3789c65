//! Color theme constants for the outbreak UI
//!
//! Defines the dark palette used throughout the screens, plus the mapping
//! from card indicator colors to terminal colors.

use crate::models::IndicatorColor;
use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and key hints
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Header/title text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info (updated line, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error text color
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Card Indicator Colors
// ============================================================================

/// Caution figures (cases) - yellow
pub const COLOR_CAUTION: Color = Color::Yellow;

/// Severe figures (deaths, critical) - red
pub const COLOR_SEVERE: Color = Color::Red;

/// Positive figures (recovered) - green
pub const COLOR_POSITIVE: Color = Color::LightGreen;

/// Neutral figures (active, tests) - cyan
pub const COLOR_NEUTRAL: Color = Color::Cyan;

/// Map a card indicator to its terminal color.
pub fn indicator_color(indicator: IndicatorColor) -> Color {
    match indicator {
        IndicatorColor::Caution => COLOR_CAUTION,
        IndicatorColor::Severe => COLOR_SEVERE,
        IndicatorColor::Positive => COLOR_POSITIVE,
        IndicatorColor::Neutral => COLOR_NEUTRAL,
    }
}
