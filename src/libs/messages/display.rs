//! Display implementation converting [`Message`] variants into terminal text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),
            Message::ConfigModuleMailgun => "Mailgun settings".to_string(),
            Message::ConfigModuleEmail => "Email routing settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptJiraDomain => "Enter the Jira domain (e.g. company.atlassian.net)".to_string(),
            Message::PromptJiraEmail => "Enter the Jira account email".to_string(),
            Message::PromptJiraApiToken => "Enter the Jira API token".to_string(),
            Message::PromptAccountIds => "Enter account ids to report on (JSON array)".to_string(),
            Message::PromptMailgunDomain => "Enter the Mailgun domain".to_string(),
            Message::PromptMailgunApiKey => "Enter the Mailgun API key".to_string(),
            Message::PromptEmailFrom => "Enter the sender address".to_string(),
            Message::PromptEmailTo => "Enter the recipient for range and monthly reports".to_string(),
            Message::PromptEmailDailyTo => "Enter the recipient for daily reports".to_string(),
            Message::JiraNotConfigured => "Jira is not configured. Run 'wlr init' first".to_string(),
            Message::MailgunNotConfigured => "Mailgun is not configured. Run 'wlr init' first".to_string(),
            Message::EmailNotConfigured => "Email routing is not configured. Run 'wlr init' first".to_string(),

            // === ACCOUNT LIST MESSAGES ===
            Message::AccountListEmpty => "Account id list is empty".to_string(),
            Message::AccountListParseFailed(raw) => format!("Account id list is not a valid JSON array of strings: {}", raw),

            // === FETCH MESSAGES ===
            Message::DisplayNameLookupFailed(account_id) => {
                format!("Failed to resolve display name for {}, falling back to account id", account_id)
            }
            Message::IssueSearchFailed(account_id) => format!("Issue search failed for {}, skipping account", account_id),
            Message::WorklogFetchFailed(issue_key) => format!("Failed to fetch worklogs for {}, skipping issue", issue_key),
            Message::WorklogMissingStarted(issue_key) => format!("Worklog entry for {} is missing a started date, skipping", issue_key),

            // === REPORT MESSAGES ===
            Message::NoWorklogsFound => "No worklogs found for the specified date range and accounts.".to_string(),
            Message::NoCommentProvided => "No comment provided".to_string(),
            Message::ReportSent(recipient) => format!("Report sent to {}", recipient),
            Message::ReportSendFailed(status) => format!("Failed to send report: {}", status),
            Message::ReportPreview(subject) => format!("Report preview: {}", subject),

            // === DATE RANGE MESSAGES ===
            Message::RangeStartAfterEnd(from, to) => format!("Invalid date range: {} is after {}", from, to),
            Message::RangeBoundsRequired => "Both --from and --to must be provided for an explicit range".to_string(),
        };
        write!(f, "{}", text)
    }
}
