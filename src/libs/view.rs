//! Terminal table views for report previews.

use super::aggregate::AccountAggregate;
use super::formatter::{format_date_mmddyyyy, format_total};
use super::worklog::WorklogEntry;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn worklogs(entries: &[WorklogEntry]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["DATE", "ACCOUNT", "ISSUE", "TIME", "DESCRIPTION"]);
        for entry in entries {
            table.add_row(row![
                format_date_mmddyyyy(entry.date),
                entry.account_name,
                entry.issue_key,
                entry.time_spent,
                entry.description
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn totals(aggregates: &[AccountAggregate]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ACCOUNT", "ENTRIES", "TOTAL"]);
        for aggregate in aggregates {
            table.add_row(row![
                aggregate.account_name,
                aggregate.lines.len(),
                format_total(aggregate.total_seconds)
            ]);
        }
        table.printstd();
        Ok(())
    }
}
