//! Reusable formatting utilities for CLI output
//!
//! Timestamps, durations and other display values shared across commands.

use chrono::{DateTime, Local, Utc};

/// Format a UTC timestamp as local date/time.
///
/// Returns "N/A" when the timestamp is absent.
///
/// # Example output
/// `2025-01-15 14:30`
pub fn format_timestamp_local(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

/// Elapsed time between two timestamps, formatted by [`format_duration_seconds`].
pub fn format_elapsed(start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format_duration_seconds((*end - *start).num_seconds()),
        _ => "N/A".to_string(),
    }
}

/// Format a duration in seconds to a human-readable string.
///
/// Returns "N/A" if the duration is zero or negative.
///
/// # Example output
/// - `2h 15m 30s` (hours, minutes, seconds)
/// - `5m 10s` (minutes, seconds)
/// - `45s` (seconds only)
pub fn format_duration_seconds(secs: i64) -> String {
    if secs <= 0 {
        return "N/A".to_string();
    }

    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Truncate a string to `max_len` characters with an ellipsis.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
