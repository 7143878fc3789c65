//! AppMessage enum for async communication within the application.

use crate::models::{CountrySummary, StatsSnapshot};

/// Messages received from spawned fetch tasks.
///
/// Snapshot completions carry the generation tag of the fetch that produced
/// them; the handler discards completions whose generation is stale.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A snapshot fetch completed successfully
    SnapshotLoaded {
        generation: u64,
        snapshot: StatsSnapshot,
    },
    /// A snapshot fetch failed
    FetchFailed { generation: u64, error: String },
    /// The country list for the search screen loaded
    CountriesLoaded { countries: Vec<CountrySummary> },
    /// The country list fetch failed
    CountriesLoadFailed { error: String },
}
