//! Screen transitions.
//!
//! Navigation is one-directional from the fetch flow's perspective: the
//! failure handler pushes the error screen and never hears back. Returning
//! to the stats screen always goes through [`App::initialize`], so a failed
//! or stale view never survives the round trip.

use super::{App, Screen};

impl App {
    /// Open the country search screen, loading the country list on first
    /// use.
    pub fn navigate_to_search(&mut self) {
        self.search.reset_input();
        self.screen = Screen::Search;
        self.load_countries();
        self.mark_dirty();
    }

    /// Hand off to the error screen after a failed fetch.
    pub fn navigate_to_error(&mut self) {
        self.screen = Screen::Error;
        self.mark_dirty();
    }

    /// Leave the search screen without selecting; the stats view is
    /// untouched.
    pub fn cancel_search(&mut self) {
        self.screen = Screen::Stats;
        self.mark_dirty();
    }

    /// Confirm the search selection: switch scope and remount stats.
    pub fn confirm_search_selection(&mut self) {
        if let Some(country) = self.search.selected_country() {
            let scope = crate::models::Scope::Country(country.to_location());
            self.initialize(scope);
        }
    }

    /// Retry from the error screen: remount the current scope from scratch.
    pub fn retry(&mut self) {
        let scope = self.view.scope.clone();
        self.initialize(scope);
    }
}
