//! Message handling for fetch completions.
//!
//! The handler runs on the event-loop task and is the only writer of the
//! view state, so no locking is needed around it.

use super::{App, AppMessage};

impl App {
    /// Apply one message from a spawned fetch task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SnapshotLoaded {
                generation,
                snapshot,
            } => {
                if !self.view.commit_snapshot(generation, &snapshot) {
                    tracing::debug!(generation, "discarding stale snapshot");
                    return;
                }
                self.mark_dirty();
            }
            AppMessage::FetchFailed { generation, error } => {
                if !self.view.fail(generation) {
                    tracing::debug!(generation, "discarding stale fetch failure");
                    return;
                }
                tracing::error!(%error, "fetch failed");
                self.last_error = Some(error);
                self.navigate_to_error();
            }
            AppMessage::CountriesLoaded { countries } => {
                self.search.countries = countries;
                self.search.loading = false;
                self.search.error = None;
                self.mark_dirty();
            }
            AppMessage::CountriesLoadFailed { error } => {
                tracing::warn!(%error, "country list fetch failed");
                self.search.loading = false;
                self.search.error = Some(error);
                self.mark_dirty();
            }
        }
    }
}
