//! View state for the stats screen.
//!
//! [`StatsView`] is the single writer target of the fetch flow: the event
//! loop's message handler is the only place it mutates, and every mutation
//! goes through one of the transition methods below.

use crate::models::{DisplayRecord, Scope, StatsSnapshot};
use crate::stats::{format_updated_message, project_snapshot_to_records};

/// Where the screen currently is in the fetch lifecycle.
///
/// Exactly one phase holds at a time, which encodes the "loading XOR
/// refreshing XOR settled" invariant directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed but no fetch started yet.
    #[default]
    Idle,
    /// First fetch for this scope is outstanding; no records to show.
    Loading,
    /// A refresh is outstanding; previous records stay visible.
    Refreshing,
    /// Last fetch succeeded; records are current.
    Settled,
    /// Last fetch failed; the error screen owns the interaction from here.
    Failed,
}

/// The renderable state of the stats screen.
pub struct StatsView {
    pub scope: Scope,
    pub phase: Phase,
    pub records: Vec<DisplayRecord>,
    pub page_title: String,
    pub last_updated: String,
    /// Fetch generation counter. Every fetch start bumps it; completions
    /// carrying an older generation are stale and must be discarded.
    generation: u64,
}

impl StatsView {
    /// Create a fresh Idle view for a scope.
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            phase: Phase::Idle,
            records: Vec::new(),
            page_title: String::new(),
            last_updated: String::new(),
            generation: 0,
        }
    }

    /// The generation of the most recently started fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a fetch completion for `generation` is still current.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Start a full-screen load. Returns the generation tag the fetch task
    /// must hand back with its completion.
    pub fn begin_loading(&mut self) -> u64 {
        self.phase = Phase::Loading;
        self.generation += 1;
        self.generation
    }

    /// Start a refresh, keeping the current records on screen. Falls back
    /// to a full load when there is nothing settled to keep showing.
    pub fn begin_refreshing(&mut self) -> u64 {
        self.phase = match self.phase {
            Phase::Settled | Phase::Refreshing => Phase::Refreshing,
            _ => Phase::Loading,
        };
        self.generation += 1;
        self.generation
    }

    /// Replace the scope and reset to a fresh Idle view, keeping the
    /// generation monotonic so in-flight completions for the old scope
    /// stay stale.
    pub fn reset_scope(&mut self, scope: Scope) {
        self.scope = scope;
        self.phase = Phase::Idle;
        self.records.clear();
        self.page_title.clear();
        self.last_updated.clear();
    }

    /// Commit a successful fetch: derive and install records, title, and
    /// the updated label together, then settle.
    ///
    /// A stale generation leaves the view untouched and returns false.
    pub fn commit_snapshot(&mut self, generation: u64, snapshot: &StatsSnapshot) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.records = project_snapshot_to_records(snapshot);
        self.page_title = self.scope.page_title().to_string();
        self.last_updated = format_updated_message(snapshot.updated);
        self.phase = Phase::Settled;
        true
    }

    /// Record a failed fetch. Settled values are retained for the return
    /// path; the caller hands control to the error screen.
    ///
    /// A stale generation leaves the view untouched and returns false.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = Phase::Failed;
        true
    }

    /// Whether any fetch is outstanding.
    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Refreshing)
    }
}
