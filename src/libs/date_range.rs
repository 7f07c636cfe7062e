//! Calendar date range calculation.
//!
//! All ranges are inclusive calendar-date spans computed against the UTC
//! calendar. The functions take `today` explicitly so they stay pure and
//! testable; callers pass `Utc::now().date_naive()`.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, Duration, Months, NaiveDate};

/// An inclusive calendar date range. Invariant: `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(msg_error_anyhow!(Message::RangeStartAfterEnd(
                from.format("%Y-%m-%d").to_string(),
                to.format("%Y-%m-%d").to_string()
            )));
        }
        Ok(Self { from, to })
    }

    /// A range covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    pub fn is_single_day(&self) -> bool {
        self.from == self.to
    }
}

/// First through last day of the month containing `today`.
pub fn current_month_range(today: NaiveDate) -> DateRange {
    let from = today.with_day(1).expect("day 1 is valid for every month");
    let to = from + Months::new(1) - Duration::days(1);
    DateRange { from, to }
}

/// First through last day of the month preceding the one containing `today`.
pub fn previous_month_range(today: NaiveDate) -> DateRange {
    let to = today.with_day(1).expect("day 1 is valid for every month") - Duration::days(1);
    let from = to.with_day(1).expect("day 1 is valid for every month");
    DateRange { from, to }
}

/// The most recently completed Monday through Sunday week before `today`.
///
/// The running week never qualifies: on a Sunday the returned range ends on
/// the previous Sunday, not today. The result is always a 7-day span
/// starting on a Monday.
pub fn previous_week_range(today: NaiveDate) -> DateRange {
    let days_since_monday = today.weekday().num_days_from_monday() as i64;
    let from = today - Duration::days(days_since_monday + 7);
    DateRange { from, to: from + Duration::days(6) }
}
