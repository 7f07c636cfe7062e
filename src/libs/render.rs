//! HTML report rendering.
//!
//! Turns aggregated per-account data into the final email artifact: a
//! subject line and an HTML body with a kind-dependent header, one `<h3>`
//! summary line per account and, for accounts with entries, a table of rows
//! sorted ascending by date. The markup shape is consumed by existing email
//! clients and must stay stable.

use crate::libs::aggregate::AccountAggregate;
use crate::libs::date_range::DateRange;
use crate::libs::formatter::{format_date_mmddyyyy, format_month, format_total};
use crate::libs::messages::Message;
use chrono::NaiveDate;

/// Which phrasing the report header and subject use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    SingleDay,
    Range,
    Monthly,
}

impl ReportKind {
    pub fn for_range(range: &DateRange, monthly: bool) -> Self {
        if monthly {
            ReportKind::Monthly
        } else if range.is_single_day() {
            ReportKind::SingleDay
        } else {
            ReportKind::Range
        }
    }
}

/// The final rendered artifact, consumed once by the notifier.
#[derive(Debug, Clone)]
pub struct Report {
    pub kind: ReportKind,
    pub subject: String,
    pub html_body: String,
}

/// Renders aggregates into a subject line and HTML body.
pub fn render(aggregates: &[AccountAggregate], range: &DateRange, kind: ReportKind) -> Report {
    let mut html_body = match kind {
        ReportKind::Monthly => format!("<h2>📝 Monthly Worklog Report – {}</h2>", format_month(range.from)),
        ReportKind::SingleDay => format!("<h2>📝 Worklog report for {}</h2>", format_date_mmddyyyy(range.from)),
        ReportKind::Range => format!(
            "<h2>📊 Weekly Worklog ({} → {})</h2>",
            format_date_mmddyyyy(range.from),
            format_date_mmddyyyy(range.to)
        ),
    };

    for aggregate in aggregates {
        html_body.push_str(&account_section(aggregate));
    }

    if aggregates.iter().all(|aggregate| aggregate.lines.is_empty()) {
        html_body.push_str(&format!("<p>{}</p>", Message::NoWorklogsFound));
    }

    let subject = match kind {
        ReportKind::Monthly => format!("Monthly Worklog Report – {}", format_month(range.from)),
        ReportKind::SingleDay => format!("📝 Worklog report for {}", format_date_mmddyyyy(range.from)),
        ReportKind::Range => format!(
            "Weekly Worklog ({} → {})",
            format_date_mmddyyyy(range.from),
            format_date_mmddyyyy(range.to)
        ),
    };

    Report { kind, subject, html_body }
}

/// Renders one account's subsection: heading with total, then a table of
/// entries when there are any.
fn account_section(aggregate: &AccountAggregate) -> String {
    let heading = format!(
        "<h3>Summary of Hours - {}: {}</h3>",
        aggregate.account_name,
        format_total(aggregate.total_seconds)
    );
    if aggregate.lines.is_empty() {
        return heading;
    }

    let mut lines = aggregate.lines.clone();
    lines.sort_by_key(|line| line_date(line));

    let rows: String = lines
        .iter()
        .map(|line| {
            let mut parts = line.splitn(4, " | ");
            let issue_key = parts.next().unwrap_or("");
            let date = parts.next().unwrap_or("");
            let time = parts.next().unwrap_or("");
            let description = parts.next().unwrap_or("");
            let date = line_date_text(date);
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                date, issue_key, description, time
            )
        })
        .collect();

    format!(
        "{}<table border=\"1\" cellpadding=\"6\" cellspacing=\"0\" style=\"border-collapse: collapse;\">\
         <tr><th>Date</th><th>Task/Ticket ID</th><th>Description</th><th>Hours Spent</th></tr>{}</table><br/>",
        heading, rows
    )
}

fn line_date(line: &str) -> Option<NaiveDate> {
    let date_field = line.split(" | ").nth(1)?;
    NaiveDate::parse_from_str(date_field, "%Y-%m-%d").ok()
}

/// MM/DD/YYYY for a line's ISO date field; unparseable text passes through.
fn line_date_text(date_field: &str) -> String {
    match NaiveDate::parse_from_str(date_field, "%Y-%m-%d") {
        Ok(date) => format_date_mmddyyyy(date),
        Err(_) => date_field.to_string(),
    }
}
