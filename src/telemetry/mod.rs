//! Analytics and diagnostics sinks.
//!
//! The fetch flow reports screen views and a searched-item attribute on
//! every fetch, and records errors on failure. Both sinks are trait seams
//! so tests can observe the calls; the production implementations forward
//! to `tracing`.

use std::fmt;
use std::sync::Mutex;

/// Failure writing a diagnostics attribute.
#[derive(Debug, Clone)]
pub struct DiagnosticsError {
    pub message: String,
}

impl fmt::Display for DiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diagnostics write failed: {}", self.message)
    }
}

impl std::error::Error for DiagnosticsError {}

/// What a failed diagnostics attribute write does to the fetch it belongs to.
///
/// The original implementation awaited the attribute write unguarded, so a
/// diagnostics failure propagated as a fetch failure. That behavior is kept
/// selectable; the default reports diagnostics failures on their own channel
/// (a log line) and never fails the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticsPolicy {
    /// Log the failure and continue the fetch.
    #[default]
    SeparateChannel,
    /// Abort the fetch, reproducing the original unguarded behavior.
    FoldIntoFetch,
}

/// Screen-view and event reporting. Fire-and-forget; must never fail a fetch.
pub trait AnalyticsSink: Send + Sync {
    fn screen_view(&self, name: &str);
    fn event(&self, name: &str);
}

/// Crash-context reporting: one attribute write per fetch, one error record
/// per failure.
pub trait DiagnosticsSink: Send + Sync {
    fn set_attribute(&self, key: &str, value: &str) -> Result<(), DiagnosticsError>;
    fn record_error(&self, error: &dyn std::error::Error);
}

/// Production analytics sink backed by `tracing`.
#[derive(Debug, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn screen_view(&self, name: &str) {
        tracing::info!(target: "analytics", screen = name, "screen view");
    }

    fn event(&self, name: &str) {
        tracing::info!(target: "analytics", event = name, "event");
    }
}

/// Production diagnostics sink backed by `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn set_attribute(&self, key: &str, value: &str) -> Result<(), DiagnosticsError> {
        tracing::debug!(target: "diagnostics", key, value, "attribute");
        Ok(())
    }

    fn record_error(&self, error: &dyn std::error::Error) {
        tracing::error!(target: "diagnostics", %error, "recorded error");
    }
}

/// Recording sinks for tests: remember every call for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub screen_views: Mutex<Vec<String>>,
    pub events: Mutex<Vec<String>>,
    pub attributes: Mutex<Vec<(String, String)>>,
    pub recorded_errors: Mutex<Vec<String>>,
    /// When set, every `set_attribute` call fails with this message.
    pub attribute_failure: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_attributes(message: impl Into<String>) -> Self {
        Self {
            attribute_failure: Some(message.into()),
            ..Self::default()
        }
    }
}

impl AnalyticsSink for RecordingSink {
    fn screen_view(&self, name: &str) {
        self.screen_views.lock().unwrap().push(name.to_string());
    }

    fn event(&self, name: &str) {
        self.events.lock().unwrap().push(name.to_string());
    }
}

impl DiagnosticsSink for RecordingSink {
    fn set_attribute(&self, key: &str, value: &str) -> Result<(), DiagnosticsError> {
        if let Some(message) = &self.attribute_failure {
            return Err(DiagnosticsError {
                message: message.clone(),
            });
        }
        self.attributes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn record_error(&self, error: &dyn std::error::Error) {
        self.recorded_errors.lock().unwrap().push(error.to_string());
    }
}
