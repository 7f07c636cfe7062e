//! API client modules for external service integrations.
//!
//! The core pipeline never talks to concrete services directly; it consumes
//! the [`IssueTracker`] and [`Notifier`] traits defined here. The Jira and
//! Mailgun clients implement them over HTTP, and tests substitute in-memory
//! fakes.

use crate::libs::date_range::DateRange;
use anyhow::Result;

pub mod jira;
pub mod mailgun;

// Re-export configuration structs for easier access from other modules
pub use jira::{Jira, JiraConfig};
pub use mailgun::{Mailgun, MailgunConfig};

/// A candidate issue returned by the issue search.
#[derive(Debug, Clone)]
pub struct Issue {
    pub key: String,
    pub summary: Option<String>,
}

/// One raw worklog record as returned by the tracker's listing endpoint.
///
/// The listing endpoint returns every worklog on an issue regardless of
/// author, and records from real deployments are not always well formed, so
/// author and start date are optional here and re-validated downstream.
#[derive(Debug, Clone)]
pub struct WorklogRecord {
    pub author_id: Option<String>,
    pub started: Option<String>,
    pub time_spent_seconds: i64,
    pub comment: Option<String>,
}

/// Read access to an issue-tracking service.
#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    /// Resolves the human display name for an account id. Best effort;
    /// callers fall back to the raw id on failure.
    async fn resolve_display_name(&self, account_id: &str) -> Result<String>;

    /// Searches for issues that carry worklogs authored by `account_id`
    /// within `range`. This is a coarse filter: returned issues may carry
    /// worklogs by other authors or outside the range.
    async fn search_issues(&self, account_id: &str, range: &DateRange) -> Result<Vec<Issue>>;

    /// Lists all worklogs recorded against an issue.
    async fn list_worklogs(&self, issue_key: &str) -> Result<Vec<WorklogRecord>>;
}

/// Delivery of a rendered report to a recipient.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    async fn send(&self, from: &str, to: &str, subject: &str, html_body: &str) -> Result<()>;
}
