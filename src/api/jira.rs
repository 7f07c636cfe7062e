//! Jira Cloud REST v3 client.
//!
//! Implements [`IssueTracker`] over the `user`, `search` and
//! `issue/{key}/worklog` endpoints with Basic authentication built from the
//! configured email and API token. Worklog comments arrive in Atlassian
//! Document Format; only the leading plain-text node is extracted.

use super::{Issue, IssueTracker, WorklogRecord};
use crate::libs::config::ConfigModule;
use crate::libs::date_range::DateRange;
use crate::libs::messages::Message;
use crate::libs::worklog::parse_account_ids;
use anyhow::Result;
use base64::prelude::*;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use serde::{Deserialize, Serialize};

const USER_URL: &str = "rest/api/3/user";
const SEARCH_URL: &str = "rest/api/3/search";
const ISSUE_URL: &str = "rest/api/3/issue";
const MAX_SEARCH_RESULTS: u32 = 100;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JiraUser {
    account_id: Option<String>,
    display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JiraSearchResults {
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JiraIssue {
    key: String,
    fields: JiraIssueFields,
}

#[derive(Serialize, Deserialize, Debug)]
struct JiraIssueFields {
    summary: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JiraWorklogPage {
    #[serde(default)]
    worklogs: Vec<JiraWorklog>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JiraWorklog {
    author: Option<JiraAuthor>,
    started: Option<String>,
    time_spent_seconds: Option<i64>,
    comment: Option<AdfDocument>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JiraAuthor {
    account_id: Option<String>,
}

/// Minimal Atlassian Document Format slice: a document of blocks, each block
/// a list of inline nodes with optional text.
#[derive(Serialize, Deserialize, Debug)]
struct AdfDocument {
    #[serde(default)]
    content: Vec<AdfBlock>,
}

#[derive(Serialize, Deserialize, Debug)]
struct AdfBlock {
    #[serde(default)]
    content: Vec<AdfInline>,
}

#[derive(Serialize, Deserialize, Debug)]
struct AdfInline {
    text: Option<String>,
}

impl AdfDocument {
    fn plain_text(&self) -> Option<String> {
        self.content
            .first()?
            .content
            .first()?
            .text
            .clone()
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: JiraConfig,
    base_url: String,
}

impl Jira {
    pub fn new(config: &JiraConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            base_url: format!("https://{}", config.domain),
        }
    }

    /// Points the client at an explicit base URL instead of the configured
    /// domain. Used by tests against a local mock server.
    pub fn with_base_url(config: &JiraConfig, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let token = BASE64_STANDARD.encode(format!("{}:{}", self.config.email, self.config.api_token));
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Basic {}", token))?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl IssueTracker for Jira {
    async fn resolve_display_name(&self, account_id: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, USER_URL);
        let res = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .query(&[("accountId", account_id)])
            .send()
            .await?;

        if !res.status().is_success() {
            anyhow::bail!("user lookup returned {}", res.status());
        }

        let user = res.json::<JiraUser>().await?;
        Ok(user.display_name.unwrap_or_else(|| account_id.to_string()))
    }

    async fn search_issues(&self, account_id: &str, range: &DateRange) -> Result<Vec<Issue>> {
        let jql = format!(
            "worklogAuthor=\"{}\" AND worklogDate >= \"{}\" AND worklogDate <= \"{}\"",
            account_id,
            range.from.format("%Y-%m-%d"),
            range.to.format("%Y-%m-%d")
        );
        let url = format!("{}/{}", self.base_url, SEARCH_URL);
        let max_results = MAX_SEARCH_RESULTS.to_string();
        let res = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .query(&[
                ("jql", jql.as_str()),
                ("fields", "key,summary"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            anyhow::bail!("issue search returned {}", res.status());
        }

        let results = res.json::<JiraSearchResults>().await?;
        Ok(results
            .issues
            .into_iter()
            .map(|issue| Issue {
                key: issue.key,
                summary: issue.fields.summary,
            })
            .collect())
    }

    async fn list_worklogs(&self, issue_key: &str) -> Result<Vec<WorklogRecord>> {
        let url = format!("{}/{}/{}/worklog", self.base_url, ISSUE_URL, issue_key);
        let res = self.client.get(&url).headers(self.headers()?).send().await?;

        if !res.status().is_success() {
            anyhow::bail!("worklog listing returned {}", res.status());
        }

        let page = res.json::<JiraWorklogPage>().await?;
        Ok(page
            .worklogs
            .into_iter()
            .map(|log| WorklogRecord {
                author_id: log.author.and_then(|author| author.account_id),
                started: log.started,
                time_spent_seconds: log.time_spent_seconds.unwrap_or(0),
                comment: log.comment.as_ref().and_then(AdfDocument::plain_text),
            })
            .collect())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    pub domain: String,
    pub email: String,
    pub api_token: String,
    /// Account ids whose worklogs are included in reports.
    #[serde(default)]
    pub account_ids: Vec<String>,
}

impl JiraConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "jira".to_string(),
            name: "Jira".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            domain: "".to_string(),
            email: "".to_string(),
            api_token: "".to_string(),
            account_ids: vec![],
        });
        let domain: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraDomain.to_string())
            .default(config.domain)
            .interact_text()?;
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraEmail.to_string())
            .default(config.email)
            .interact_text()?;
        let api_token: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraApiToken.to_string())
            .default(config.api_token)
            .interact_text()?;
        let account_ids_raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAccountIds.to_string())
            .default(serde_json::to_string(&config.account_ids)?)
            .interact_text()?;
        Ok(Self {
            domain,
            email,
            api_token,
            account_ids: parse_account_ids(&account_ids_raw)?,
        })
    }
}
