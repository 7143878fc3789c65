//! Outbreak - a terminal client for live pandemic statistics
//!
//! This library exposes modules for use in integration tests.

pub mod api;
pub mod app;
pub mod models;
pub mod prelude;
pub mod stats;
pub mod telemetry;
pub mod ui;
pub mod view_state;
