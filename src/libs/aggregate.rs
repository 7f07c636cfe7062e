//! Per-account grouping and total computation.
//!
//! Entries are grouped by resolved account name, one formatted line per
//! entry. Totals are built by re-parsing each entry's "Hh Mm" text through
//! [`parse_time_spent`], so every entry is floored to whole minutes before
//! summation; the raw seconds are not summed directly.

use crate::libs::formatter::parse_time_spent;
use crate::libs::worklog::{Account, WorklogEntry};

/// Aggregated worklog data for one account.
#[derive(Debug, Clone)]
pub struct AccountAggregate {
    pub account_name: String,
    /// Formatted `"<issueKey> | <date> | <Hh Mm> | <description>"` lines in
    /// ascending date order.
    pub lines: Vec<String>,
    /// Sum of minute-truncated per-entry durations.
    pub total_seconds: i64,
}

impl AccountAggregate {
    fn empty(account_name: &str) -> Self {
        Self {
            account_name: account_name.to_string(),
            lines: vec![],
            total_seconds: 0,
        }
    }
}

/// Groups entries by account name.
///
/// Every resolved account is seeded with an empty aggregate in configuration
/// order, so accounts without any matching worklogs still render as a
/// zero-total heading. Entries arrive date-sorted, so per-account lines stay
/// in ascending date order.
pub fn aggregate(accounts: &[Account], entries: &[WorklogEntry]) -> Vec<AccountAggregate> {
    let mut aggregates: Vec<AccountAggregate> = vec![];
    for account in accounts {
        if !aggregates.iter().any(|aggregate| aggregate.account_name == account.display_name) {
            aggregates.push(AccountAggregate::empty(&account.display_name));
        }
    }

    for entry in entries {
        let position = aggregates.iter().position(|aggregate| aggregate.account_name == entry.account_name);
        let aggregate = match position {
            Some(position) => &mut aggregates[position],
            None => {
                aggregates.push(AccountAggregate::empty(&entry.account_name));
                aggregates.last_mut().expect("aggregate was just pushed")
            }
        };

        aggregate.lines.push(format!(
            "{} | {} | {} | {}",
            entry.issue_key,
            entry.date.format("%Y-%m-%d"),
            entry.time_spent,
            entry.description
        ));
        aggregate.total_seconds += parse_time_spent(&entry.time_spent);
    }

    aggregates
}
