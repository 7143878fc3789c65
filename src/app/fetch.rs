//! Fetch orchestration: telemetry writes, provider selection, and the
//! spawned task that reports back over the message channel.

use super::{App, AppMessage};
use crate::api::provider_for_scope;
use crate::models::Scope;
use crate::telemetry::DiagnosticsPolicy;

impl App {
    /// Start a full-screen load for the current scope.
    pub fn fetch(&mut self) {
        let generation = self.view.begin_loading();
        self.spawn_fetch(generation);
    }

    /// Re-fetch the current scope, keeping the card grid visible.
    pub fn refresh(&mut self) {
        let generation = self.view.begin_refreshing();
        self.spawn_fetch(generation);
        self.mark_dirty();
    }

    fn spawn_fetch(&mut self, generation: u64) {
        match &self.view.scope {
            Scope::Global => {
                self.analytics.screen_view("Global Stats Screen");
                self.analytics.event("global");
            }
            Scope::Country(_) => {
                self.analytics.screen_view("Location Stats Screen");
            }
        }

        if let Err(error) = self
            .diagnostics
            .set_attribute("searched_item", self.view.scope.searched_item())
        {
            match self.diagnostics_policy {
                DiagnosticsPolicy::SeparateChannel => {
                    tracing::warn!(%error, "diagnostics attribute write failed");
                }
                DiagnosticsPolicy::FoldIntoFetch => {
                    self.diagnostics.record_error(&error);
                    let _ = self.message_tx.send(AppMessage::FetchFailed {
                        generation,
                        error: error.to_string(),
                    });
                    return;
                }
            }
        }

        let provider = provider_for_scope(&self.client, &self.view.scope);
        let tx = self.message_tx.clone();
        let diagnostics = self.diagnostics.clone();

        tokio::spawn(async move {
            match provider.load_basic_data().await {
                Ok(snapshot) => {
                    let _ = tx.send(AppMessage::SnapshotLoaded {
                        generation,
                        snapshot,
                    });
                }
                Err(error) => {
                    diagnostics.record_error(&error);
                    let _ = tx.send(AppMessage::FetchFailed {
                        generation,
                        error: error.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch the country list for the search screen, once.
    pub fn load_countries(&mut self) {
        if self.search.loading || !self.search.countries.is_empty() {
            return;
        }
        self.search.loading = true;

        let client = self.client.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.fetch_countries().await {
                Ok(countries) => {
                    let _ = tx.send(AppMessage::CountriesLoaded { countries });
                }
                Err(error) => {
                    let _ = tx.send(AppMessage::CountriesLoadFailed {
                        error: error.to_string(),
                    });
                }
            }
        });
    }
}
