//! Structured message definitions for all user-facing text.
//!
//! Every string shown to the user (or written to the log) is a variant of
//! [`Message`], so wording lives in one place and call sites stay typed.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleJira,
    ConfigModuleMailgun,
    ConfigModuleEmail,
    PromptSelectModules,
    PromptJiraDomain,
    PromptJiraEmail,
    PromptJiraApiToken,
    PromptAccountIds,
    PromptMailgunDomain,
    PromptMailgunApiKey,
    PromptEmailFrom,
    PromptEmailTo,
    PromptEmailDailyTo,
    JiraNotConfigured,
    MailgunNotConfigured,
    EmailNotConfigured,

    // === ACCOUNT LIST MESSAGES ===
    AccountListEmpty,
    AccountListParseFailed(String), // raw input

    // === FETCH MESSAGES ===
    DisplayNameLookupFailed(String), // account id
    IssueSearchFailed(String),       // account id
    WorklogFetchFailed(String),      // issue key
    WorklogMissingStarted(String),   // issue key

    // === REPORT MESSAGES ===
    NoWorklogsFound,
    NoCommentProvided,
    ReportSent(String),       // recipient
    ReportSendFailed(String), // status
    ReportPreview(String),    // subject

    // === DATE RANGE MESSAGES ===
    RangeStartAfterEnd(String, String), // from, to
    RangeBoundsRequired,
}
