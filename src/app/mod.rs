//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`SearchState`] - Country picker state
//! - [`AppMessage`] - Messages for async communication

mod fetch;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, SearchState};

use crate::api::StatsApiClient;
use crate::models::Scope;
use crate::telemetry::{
    AnalyticsSink, DiagnosticsPolicy, DiagnosticsSink, TracingAnalytics, TracingDiagnostics,
};
use crate::view_state::StatsView;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application state
pub struct App {
    /// Current screen being displayed
    pub screen: Screen,
    /// View state for the stats screen
    pub view: StatsView,
    /// Country search screen state
    pub search: SearchState,
    /// Failure summary shown on the error screen
    pub last_error: Option<String>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// True when the UI must be redrawn on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner animation
    pub tick_count: u64,
    /// Receiver for async messages (fetch completions)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to fetch tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Statistics API client (cloned into fetch tasks)
    pub client: StatsApiClient,
    /// Analytics sink, fire-and-forget
    pub analytics: Arc<dyn AnalyticsSink>,
    /// Diagnostics sink for crash context
    pub diagnostics: Arc<dyn DiagnosticsSink>,
    /// How a failed diagnostics attribute write affects the fetch
    pub diagnostics_policy: DiagnosticsPolicy,
}

impl App {
    /// Create the app with production telemetry sinks.
    pub fn new(client: StatsApiClient) -> Self {
        Self::with_sinks(
            client,
            Arc::new(TracingAnalytics),
            Arc::new(TracingDiagnostics),
            DiagnosticsPolicy::default(),
        )
    }

    /// Create the app with explicit sinks and policy. Used by tests to
    /// observe telemetry calls.
    pub fn with_sinks(
        client: StatsApiClient,
        analytics: Arc<dyn AnalyticsSink>,
        diagnostics: Arc<dyn DiagnosticsSink>,
        diagnostics_policy: DiagnosticsPolicy,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Stats,
            view: StatsView::new(Scope::Global),
            search: SearchState::default(),
            last_error: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            client,
            analytics,
            diagnostics,
            diagnostics_policy,
        }
    }

    /// Begin showing a scope: fresh view state, then a full-screen load.
    ///
    /// Also the remount path after an error, so no stale loading state
    /// survives navigation.
    pub fn initialize(&mut self, scope: Scope) {
        self.view.reset_scope(scope);
        self.last_error = None;
        self.screen = Screen::Stats;
        self.fetch();
        self.mark_dirty();
    }

    /// Switch the viewing scope and re-fetch.
    pub fn set_scope(&mut self, scope: Scope) {
        if self.view.scope == scope && !matches!(self.screen, Screen::Error) {
            return;
        }
        self.initialize(scope);
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Spinner frames only move while a fetch is outstanding.
        if self.view.is_fetching() || self.search.loading {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
