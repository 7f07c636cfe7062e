//! Worklog fetching, filtering and normalization.
//!
//! For each configured account the fetcher resolves the display name,
//! searches for candidate issues, lists every worklog on each candidate and
//! re-validates author and date before accepting a record. The search step
//! is only a coarse filter; the listing endpoint returns all worklogs on an
//! issue regardless of author, so [`accept_worklog`] is applied to every
//! record without exception.
//!
//! Remote failures degrade gracefully: a failed display-name lookup falls
//! back to the raw account id, a failed search skips the account, a failed
//! worklog listing skips the issue. Each skipped unit is logged and retained
//! in [`WorklogData::skips`]. The only fatal condition is a malformed or
//! empty account list, which signals misconfiguration rather than a
//! transient remote fault.

use crate::api::{IssueTracker, WorklogRecord};
use crate::libs::date_range::DateRange;
use crate::libs::formatter::format_time_spent;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// One attributed unit of logged time, normalized for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct WorklogEntry {
    pub issue_key: String,
    pub date: NaiveDate,
    /// Per-entry duration text, e.g. "2h 5m".
    pub time_spent: String,
    pub time_spent_seconds: i64,
    pub description: String,
    pub account_name: String,
}

/// An account with its resolved display name. Resolved once per run.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub account_id: String,
    pub display_name: String,
}

/// A unit of work that was skipped instead of aborting the run.
#[derive(Debug, Clone)]
pub enum Skip {
    NameLookup { account_id: String, reason: String },
    Search { account_id: String, reason: String },
    Worklogs { issue_key: String, reason: String },
}

/// The accumulated result of one fetch pass.
#[derive(Debug, Default)]
pub struct WorklogData {
    /// Every requested account in configuration order, names resolved.
    pub accounts: Vec<Account>,
    /// Accepted entries, sorted ascending by calendar date across accounts.
    pub entries: Vec<WorklogEntry>,
    /// Skipped units, retained for observability.
    pub skips: Vec<Skip>,
}

/// Parses an account id list supplied as a JSON array string.
///
/// An unparseable or empty list is a configuration error and aborts the
/// pipeline; silently producing an empty report would hide the mistake.
pub fn parse_account_ids(raw: &str) -> Result<Vec<String>> {
    let account_ids: Vec<String> =
        serde_json::from_str(raw).map_err(|_| msg_error_anyhow!(Message::AccountListParseFailed(raw.to_string())))?;
    if account_ids.is_empty() {
        msg_bail_anyhow!(Message::AccountListEmpty);
    }
    Ok(account_ids)
}

/// Extracts the calendar-date portion of a worklog's started timestamp.
///
/// Started values look like `2026-08-03T09:15:00.000+0000`; only the date
/// part matters for range filtering.
pub fn started_date(record: &WorklogRecord) -> Option<NaiveDate> {
    let started = record.started.as_deref()?;
    let date_part = started.split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// The acceptance predicate applied to every listed worklog record.
///
/// Returns the parsed calendar date when the record is attributable to
/// `account_id` and falls inside `range` (inclusive on both ends); `None`
/// rejects the record. Listing endpoints over-return, so this check runs
/// regardless of what the search step already filtered.
pub fn accept_worklog(record: &WorklogRecord, account_id: &str, range: &DateRange) -> Option<NaiveDate> {
    if record.author_id.as_deref() != Some(account_id) {
        return None;
    }
    let date = started_date(record)?;
    range.contains(date).then_some(date)
}

/// Fetches, filters and normalizes worklogs for every account in `account_ids`.
///
/// Accounts are processed strictly one at a time, and every remote call is
/// awaited before the next is issued, to bound load on the tracker.
pub async fn fetch<T: IssueTracker>(tracker: &T, account_ids: &[String], range: &DateRange) -> Result<WorklogData> {
    if account_ids.is_empty() {
        msg_bail_anyhow!(Message::AccountListEmpty);
    }

    let mut data = WorklogData::default();

    for account_id in account_ids {
        let display_name = match tracker.resolve_display_name(account_id).await {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => account_id.clone(),
            Err(err) => {
                msg_warning!(Message::DisplayNameLookupFailed(account_id.clone()));
                data.skips.push(Skip::NameLookup {
                    account_id: account_id.clone(),
                    reason: err.to_string(),
                });
                account_id.clone()
            }
        };
        data.accounts.push(Account {
            account_id: account_id.clone(),
            display_name: display_name.clone(),
        });

        let issues = match tracker.search_issues(account_id, range).await {
            Ok(issues) => issues,
            Err(err) => {
                msg_warning!(Message::IssueSearchFailed(account_id.clone()));
                data.skips.push(Skip::Search {
                    account_id: account_id.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        for issue in issues {
            let records = match tracker.list_worklogs(&issue.key).await {
                Ok(records) => records,
                Err(err) => {
                    msg_warning!(Message::WorklogFetchFailed(issue.key.clone()));
                    data.skips.push(Skip::Worklogs {
                        issue_key: issue.key.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            for record in records {
                let Some(date) = accept_worklog(&record, account_id, range) else {
                    // A record by the right author with no usable start date
                    // is a data-shape anomaly worth a log line; foreign
                    // authors and out-of-range dates are dropped quietly.
                    if record.author_id.as_deref() == Some(account_id.as_str()) && started_date(&record).is_none() {
                        msg_warning!(Message::WorklogMissingStarted(issue.key.clone()));
                    }
                    continue;
                };

                let seconds = record.time_spent_seconds.max(0);
                let description = record
                    .comment
                    .clone()
                    .filter(|text| !text.is_empty())
                    .or_else(|| issue.summary.clone().filter(|text| !text.is_empty()))
                    .unwrap_or_else(|| Message::NoCommentProvided.to_string());

                data.entries.push(WorklogEntry {
                    issue_key: issue.key.clone(),
                    date,
                    time_spent: format_time_spent(seconds),
                    time_spent_seconds: seconds,
                    description,
                    account_name: display_name.clone(),
                });
            }
        }
    }

    // Global sort by calendar date; the sort is stable so discovery order
    // is preserved among entries sharing a date.
    data.entries.sort_by_key(|entry| entry.date);

    Ok(data)
}
