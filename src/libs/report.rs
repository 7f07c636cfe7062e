//! Report pipeline composition.
//!
//! Wires the fetch, aggregate and render stages together and routes the
//! rendered artifact to a notifier. Recipient selection depends only on the
//! rendered report kind: single-day reports go to the daily recipient,
//! everything else to the main one.

use crate::api::{IssueTracker, Notifier};
use crate::libs::aggregate;
use crate::libs::config::EmailConfig;
use crate::libs::date_range::DateRange;
use crate::libs::render::{self, Report, ReportKind};
use crate::libs::worklog;
use anyhow::Result;

/// Everything the pipeline needs for one run; owned per invocation.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub account_ids: Vec<String>,
    pub range: DateRange,
    pub monthly: bool,
}

/// Runs fetch, aggregation and rendering for one request.
///
/// Only a configuration-level failure (empty account list) propagates; all
/// remote failures have already degraded to skipped units inside the fetch
/// stage, so a partially populated report is still produced.
pub async fn generate<T: IssueTracker>(tracker: &T, request: &ReportRequest) -> Result<Report> {
    let data = worklog::fetch(tracker, &request.account_ids, &request.range).await?;
    for skip in &data.skips {
        tracing::debug!(?skip, "unit of work skipped during fetch");
    }
    let aggregates = aggregate::aggregate(&data.accounts, &data.entries);
    let kind = ReportKind::for_range(&request.range, request.monthly);
    Ok(render::render(&aggregates, &request.range, kind))
}

/// Picks the recipient for a rendered report.
pub fn recipient_for<'a>(kind: ReportKind, email: &'a EmailConfig) -> &'a str {
    match kind {
        ReportKind::SingleDay => &email.daily_to,
        ReportKind::Range | ReportKind::Monthly => &email.to,
    }
}

/// Delivers a rendered report, returning the chosen recipient.
///
/// A notifier failure surfaces to the caller; the already rendered report is
/// not regenerated.
pub async fn send<N: Notifier>(notifier: &N, email: &EmailConfig, report: &Report) -> Result<String> {
    let recipient = recipient_for(report.kind, email);
    notifier.send(&email.from, recipient, &report.subject, &report.html_body).await?;
    Ok(recipient.to_string())
}
