//! Prelude module for convenient imports.
//!
//! ```ignore
//! use outbreak::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, Screen, SearchState};

// Model types
pub use crate::models::{
    CountrySummary, DisplayRecord, IndicatorColor, LocationRef, Scope, StatsSnapshot,
};

// API types
pub use crate::api::{
    CountryProvider, ProviderError, StatsApiClient, StatsProvider, WorldProvider,
};

// View state
pub use crate::view_state::{Phase, StatsView};

// Telemetry
pub use crate::telemetry::{AnalyticsSink, DiagnosticsPolicy, DiagnosticsSink};

// UI
pub use crate::ui::render;
