//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`SearchState`] - Country picker dialog state

use crate::models::CountrySummary;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Stats,
    Search,
    Error,
}

/// Country search screen state: the lazily loaded country list plus the
/// incremental filter and cursor.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Full country list; fetched once on first open.
    pub countries: Vec<CountrySummary>,
    /// Whether the country list fetch is outstanding.
    pub loading: bool,
    /// Failure message from the last country list fetch, if any.
    pub error: Option<String>,
    /// Current filter text typed by the user.
    pub filter: String,
    /// Selected index within the filtered list.
    pub selected: usize,
}

impl SearchState {
    /// Countries matching the current filter, case-insensitively.
    pub fn filtered(&self) -> Vec<&CountrySummary> {
        let needle = self.filter.to_lowercase();
        self.countries
            .iter()
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The country the cursor currently rests on, if any.
    pub fn selected_country(&self) -> Option<CountrySummary> {
        self.filtered().get(self.selected).map(|c| (*c).clone())
    }

    pub fn type_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected = 0;
    }

    pub fn backspace(&mut self) {
        self.filter.pop();
        self.selected = 0;
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let max = self.filtered().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    /// Reset the filter and cursor for a fresh open; the loaded country
    /// list is kept.
    pub fn reset_input(&mut self) {
        self.filter.clear();
        self.selected = 0;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> SearchState {
        SearchState {
            countries: names
                .iter()
                .map(|n| CountrySummary {
                    name: n.to_string(),
                    code: Some(n[..2].to_uppercase()),
                })
                .collect(),
            ..SearchState::default()
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let state = state_with(&["Testland", "Northmark", "Southmark"]);
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = state_with(&["Testland", "Northmark", "Southmark"]);
        for c in "MARK".chars() {
            state.type_char(c);
        }
        let names: Vec<&str> = state.filtered().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Northmark", "Southmark"]);
    }

    #[test]
    fn test_typing_resets_selection() {
        let mut state = state_with(&["Testland", "Northmark"]);
        state.move_down();
        assert_eq!(state.selected, 1);
        state.type_char('t');
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_clamped_to_filtered_list() {
        let mut state = state_with(&["Testland", "Northmark"]);
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.selected, 1);
        state.move_up();
        state.move_up();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selected_country() {
        let mut state = state_with(&["Testland", "Northmark"]);
        state.move_down();
        assert_eq!(state.selected_country().unwrap().name, "Northmark");
    }

    #[test]
    fn test_reset_input_keeps_countries() {
        let mut state = state_with(&["Testland"]);
        state.type_char('x');
        state.error = Some("boom".to_string());
        state.reset_input();
        assert!(state.filter.is_empty());
        assert!(state.error.is_none());
        assert_eq!(state.countries.len(), 1);
    }
}
