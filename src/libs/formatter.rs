//! Duration and date formatting for worklog reports.
//!
//! Worklog durations appear in two textual forms: per-entry as "2h 5m" and
//! as an account total "2h5m" (no space). Account totals are computed by
//! re-parsing the per-entry text, which floors every entry to whole minutes;
//! [`parse_time_spent`] is the single place that conversion happens.

use chrono::{Datelike, NaiveDate};

/// Formats raw seconds as the per-entry duration text, e.g. "2h 5m".
pub fn format_time_spent(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Formats raw seconds as the account total text, e.g. "2h5m".
pub fn format_total(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}h{}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Parses "Hh Mm" duration text back into seconds.
///
/// Sub-minute precision does not survive the format/parse round trip, so a
/// 125-second entry comes back as 120. Malformed text parses as zero.
pub fn parse_time_spent(text: &str) -> i64 {
    let Some((hours, minutes)) = text.split_once("h ") else {
        return 0;
    };
    let hours: i64 = hours.trim().parse().unwrap_or(0);
    let minutes: i64 = minutes.trim().trim_end_matches('m').parse().unwrap_or(0);
    hours * 3600 + minutes * 60
}

/// Formats a calendar date as zero-padded "MM/DD/YYYY".
pub fn format_date_mmddyyyy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
}

/// Formats the month of a date as "Mon YYYY", e.g. "Aug 2026".
pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
