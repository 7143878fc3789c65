//! Formatting helpers for the stats header and cards.

use chrono::{DateTime, Utc};

/// Build the "last updated" label for a snapshot timestamp, relative to now.
///
/// `updated_ms` is milliseconds since the Unix epoch, as reported by the
/// API.
pub fn format_updated_message(updated_ms: i64) -> String {
    updated_message_at(updated_ms, Utc::now())
}

/// Pure core of [`format_updated_message`]: identical inputs always yield
/// the identical label.
pub fn updated_message_at(updated_ms: i64, now: DateTime<Utc>) -> String {
    let updated = match DateTime::<Utc>::from_timestamp_millis(updated_ms) {
        Some(ts) => ts,
        None => return "Updated just now".to_string(),
    };

    let elapsed = now.signed_duration_since(updated);
    if elapsed.num_seconds() < 0 {
        // Clock skew between us and the upstream aggregator.
        return "Updated just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Updated moments ago".to_string()
    } else if minutes == 1 {
        "Updated 1 minute ago".to_string()
    } else if hours < 1 {
        format!("Updated {} minutes ago", minutes)
    } else if hours == 1 {
        "Updated 1 hour ago".to_string()
    } else if days < 1 {
        format!("Updated {} hours ago", hours)
    } else if days == 1 {
        "Updated 1 day ago".to_string()
    } else {
        format!("Updated {} days ago", days)
    }
}

/// Format a count with thousands separators (1234567 -> "1,234,567").
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
