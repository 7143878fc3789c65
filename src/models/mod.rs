//! Data models shared across the application.
//!
//! These are the payload types exchanged with the statistics API and the
//! display-ready types derived from them:
//! - [`LocationRef`] - a named country selected for viewing
//! - [`StatsSnapshot`] - a point-in-time set of aggregate figures
//! - [`CountrySummary`] - one entry of the searchable country list
//! - [`DisplayRecord`] - a single UI-ready (title, value, indicator) card

use serde::{Deserialize, Serialize};

/// Identifies a country selected for viewing.
///
/// Supplied by the search screen; `code` is the ISO 3166-1 alpha-2 code the
/// API is queried with, `name` is the human-readable title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub code: String,
}

impl LocationRef {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// The viewing scope: the whole-world aggregate or one named country.
///
/// Fusing the mode flag and the location into one enum makes a country scope
/// without a location unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Global,
    Country(LocationRef),
}

impl Scope {
    /// Title shown in the stats header for this scope.
    pub fn page_title(&self) -> &str {
        match self {
            Scope::Global => "Global",
            Scope::Country(location) => &location.name,
        }
    }

    /// Value written to the diagnostics `searched_item` attribute.
    pub fn searched_item(&self) -> &str {
        self.page_title()
    }
}

/// A point-in-time set of aggregate figures for one scope.
///
/// Mirrors the fields of the disease.sh `/all` and `/countries/{code}`
/// responses that the card grid knows how to display. Fields absent from a
/// response deserialize to `None` and produce no card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Milliseconds since the Unix epoch at which the upstream data was
    /// last refreshed.
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub cases: Option<u64>,
    #[serde(rename = "todayCases", default)]
    pub today_cases: Option<u64>,
    #[serde(default)]
    pub deaths: Option<u64>,
    #[serde(rename = "todayDeaths", default)]
    pub today_deaths: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
    #[serde(default)]
    pub active: Option<u64>,
    #[serde(default)]
    pub critical: Option<u64>,
    #[serde(default)]
    pub tests: Option<u64>,
}

/// One entry of the country list used by the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub name: String,
    /// ISO 3166-1 alpha-2 code, when the API knows it.
    pub code: Option<String>,
}

impl CountrySummary {
    /// The location this summary resolves to when selected.
    ///
    /// Falls back to querying by name for territories without an ISO code.
    pub fn to_location(&self) -> LocationRef {
        LocationRef::new(
            self.name.clone(),
            self.code.clone().unwrap_or_else(|| self.name.clone()),
        )
    }
}

/// Severity coloring for one stat card's indicator bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorColor {
    /// Cumulative and daily case counts.
    Caution,
    /// Deaths and critical counts.
    Severe,
    /// Recovered counts.
    Positive,
    /// Active cases and testing figures.
    Neutral,
}

/// A single UI-ready card derived from one field of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub title: &'static str,
    pub value: u64,
    pub indicator: IndicatorColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_page_title_global() {
        assert_eq!(Scope::Global.page_title(), "Global");
    }

    #[test]
    fn test_scope_page_title_country() {
        let scope = Scope::Country(LocationRef::new("Testland", "TL"));
        assert_eq!(scope.page_title(), "Testland");
        assert_eq!(scope.searched_item(), "Testland");
    }

    #[test]
    fn test_snapshot_deserializes_partial_payload() {
        let json = r#"{"updated": 1700000000000, "cases": 100, "deaths": 5}"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.updated, 1_700_000_000_000);
        assert_eq!(snapshot.cases, Some(100));
        assert_eq!(snapshot.deaths, Some(5));
        assert_eq!(snapshot.recovered, None);
        assert_eq!(snapshot.tests, None);
    }

    #[test]
    fn test_snapshot_renamed_fields() {
        let json = r#"{"updated": 1, "todayCases": 7, "todayDeaths": 2}"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.today_cases, Some(7));
        assert_eq!(snapshot.today_deaths, Some(2));
    }

    #[test]
    fn test_country_summary_to_location_uses_code() {
        let summary = CountrySummary {
            name: "Testland".to_string(),
            code: Some("TL".to_string()),
        };
        assert_eq!(summary.to_location(), LocationRef::new("Testland", "TL"));
    }

    #[test]
    fn test_country_summary_to_location_falls_back_to_name() {
        let summary = CountrySummary {
            name: "Nowhere".to_string(),
            code: None,
        };
        assert_eq!(summary.to_location().code, "Nowhere");
    }
}
