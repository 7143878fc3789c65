//! Explicit view-state structs mutated only through transition methods.

mod stats_view;

pub use stats_view::{Phase, StatsView};
