//! Projection of a snapshot into the renderable card sequence.

use crate::models::{DisplayRecord, IndicatorColor, StatsSnapshot};

/// The fields the card grid knows about, in display order.
///
/// The order is a fixed property of the UI, not of the payload: two
/// snapshots with the same known fields always project to cards in the
/// same sequence.
const FIELD_ORDER: &[(&str, IndicatorColor, fn(&StatsSnapshot) -> Option<u64>)] = &[
    ("Cases", IndicatorColor::Caution, |s| s.cases),
    ("Deaths", IndicatorColor::Severe, |s| s.deaths),
    ("Recovered", IndicatorColor::Positive, |s| s.recovered),
    ("Active", IndicatorColor::Neutral, |s| s.active),
    ("Cases Today", IndicatorColor::Caution, |s| s.today_cases),
    ("Deaths Today", IndicatorColor::Severe, |s| s.today_deaths),
    ("Critical", IndicatorColor::Severe, |s| s.critical),
    ("Tests", IndicatorColor::Neutral, |s| s.tests),
];

/// Project a snapshot into the ordered sequence of display records.
///
/// Produces one record per known field present in the snapshot; absent
/// fields are skipped, so the record count equals the number of known
/// fields the snapshot carries.
pub fn project_snapshot_to_records(snapshot: &StatsSnapshot) -> Vec<DisplayRecord> {
    FIELD_ORDER
        .iter()
        .filter_map(|&(title, indicator, getter)| {
            getter(snapshot).map(|value| DisplayRecord {
                title,
                value,
                indicator,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> StatsSnapshot {
        StatsSnapshot {
            updated: 1_700_000_000_000,
            cases: Some(1),
            today_cases: Some(2),
            deaths: Some(3),
            today_deaths: Some(4),
            recovered: Some(5),
            active: Some(6),
            critical: Some(7),
            tests: Some(8),
        }
    }

    #[test]
    fn test_full_snapshot_projects_all_fields_in_order() {
        let records = project_snapshot_to_records(&full_snapshot());
        let titles: Vec<&str> = records.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec![
                "Cases",
                "Deaths",
                "Recovered",
                "Active",
                "Cases Today",
                "Deaths Today",
                "Critical",
                "Tests",
            ]
        );
    }

    #[test]
    fn test_partial_snapshot_skips_missing_fields() {
        let snapshot = StatsSnapshot {
            updated: 1_700_000_000_000,
            cases: Some(100),
            deaths: Some(5),
            ..StatsSnapshot::default()
        };
        let records = project_snapshot_to_records(&snapshot);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Cases");
        assert_eq!(records[0].value, 100);
        assert_eq!(records[1].title, "Deaths");
        assert_eq!(records[1].value, 5);
    }

    #[test]
    fn test_order_is_stable_across_different_snapshots() {
        let a = project_snapshot_to_records(&full_snapshot());
        let b = project_snapshot_to_records(&StatsSnapshot {
            cases: Some(999_999),
            tests: Some(1),
            deaths: Some(0),
            ..full_snapshot()
        });
        let titles_a: Vec<&str> = a.iter().map(|r| r.title).collect();
        let titles_b: Vec<&str> = b.iter().map(|r| r.title).collect();
        assert_eq!(titles_a, titles_b);
    }

    #[test]
    fn test_indicator_colors() {
        let records = project_snapshot_to_records(&full_snapshot());
        assert_eq!(records[0].indicator, IndicatorColor::Caution); // Cases
        assert_eq!(records[1].indicator, IndicatorColor::Severe); // Deaths
        assert_eq!(records[2].indicator, IndicatorColor::Positive); // Recovered
        assert_eq!(records[3].indicator, IndicatorColor::Neutral); // Active
    }

    #[test]
    fn test_empty_snapshot_projects_nothing() {
        let records = project_snapshot_to_records(&StatsSnapshot::default());
        assert!(records.is_empty());
    }
}
