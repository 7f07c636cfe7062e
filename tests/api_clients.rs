#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use wlr::api::{IssueTracker, Jira, JiraConfig, Mailgun, MailgunConfig, Notifier};
    use wlr::libs::date_range::DateRange;
    use chrono::NaiveDate;

    fn jira_config() -> JiraConfig {
        JiraConfig {
            domain: "company.atlassian.net".to_string(),
            email: "bot@example.com".to_string(),
            api_token: "token".to_string(),
            account_ids: vec!["acc-1".to_string()],
        }
    }

    fn august() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_display_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/api/3/user")
            .match_query(Matcher::UrlEncoded("accountId".into(), "acc-1".into()))
            .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"accountId":"acc-1","displayName":"Alice"}"#)
            .create_async()
            .await;

        let jira = Jira::with_base_url(&jira_config(), &server.url());
        let name = jira.resolve_display_name("acc-1").await.unwrap();
        assert_eq!(name, "Alice");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_resolve_display_name_missing_falls_back_to_id() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/user")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"accountId":"acc-1"}"#)
            .create_async()
            .await;

        let jira = Jira::with_base_url(&jira_config(), &server.url());
        let name = jira.resolve_display_name("acc-1").await.unwrap();
        assert_eq!(name, "acc-1");
    }

    #[tokio::test]
    async fn test_resolve_display_name_non_success_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/user")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let jira = Jira::with_base_url(&jira_config(), &server.url());
        assert!(jira.resolve_display_name("acc-1").await.is_err());
    }

    #[tokio::test]
    async fn test_search_issues_builds_worklog_jql() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "jql".into(),
                    "worklogAuthor=\"acc-1\" AND worklogDate >= \"2026-08-01\" AND worklogDate <= \"2026-08-31\"".into(),
                ),
                Matcher::UrlEncoded("fields".into(), "key,summary".into()),
                Matcher::UrlEncoded("maxResults".into(), "100".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"issues":[{"key":"PROJ-1","fields":{"summary":"Build the widget"}}]}"#)
            .create_async()
            .await;

        let jira = Jira::with_base_url(&jira_config(), &server.url());
        let issues = jira.search_issues("acc-1", &august()).await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "PROJ-1");
        assert_eq!(issues[0].summary.as_deref(), Some("Build the widget"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_issues_non_success_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let jira = Jira::with_base_url(&jira_config(), &server.url());
        assert!(jira.search_issues("acc-1", &august()).await.is_err());
    }

    #[tokio::test]
    async fn test_list_worklogs_extracts_adf_comment_text() {
        let body = r#"{
            "worklogs": [
                {
                    "author": {"accountId": "acc-1"},
                    "started": "2026-08-15T09:30:00.000+0000",
                    "timeSpentSeconds": 7500,
                    "comment": {"content": [{"content": [{"text": "widget work"}]}]}
                },
                {
                    "started": "2026-08-16T09:30:00.000+0000",
                    "timeSpentSeconds": 600
                }
            ]
        }"#;
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/issue/PROJ-1/worklog")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let jira = Jira::with_base_url(&jira_config(), &server.url());
        let records = jira.list_worklogs("PROJ-1").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].author_id.as_deref(), Some("acc-1"));
        assert_eq!(records[0].comment.as_deref(), Some("widget work"));
        assert_eq!(records[0].time_spent_seconds, 7500);
        // Records missing author or comment still come through; filtering
        // happens downstream
        assert!(records[1].author_id.is_none());
        assert!(records[1].comment.is_none());
    }

    #[tokio::test]
    async fn test_mailgun_send() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/mg.example.com/messages")
            .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Queued. Thank you."}"#)
            .create_async()
            .await;

        let config = MailgunConfig {
            domain: "mg.example.com".to_string(),
            api_key: "key".to_string(),
        };
        let mailgun = Mailgun::with_base_url(&config, &server.url());
        mailgun
            .send("reports@example.com", "team@example.com", "subject", "<p>body</p>")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_mailgun_send_non_success_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/mg.example.com/messages")
            .with_status(401)
            .create_async()
            .await;

        let config = MailgunConfig {
            domain: "mg.example.com".to_string(),
            api_key: "bad".to_string(),
        };
        let mailgun = Mailgun::with_base_url(&config, &server.url());
        assert!(mailgun
            .send("reports@example.com", "team@example.com", "subject", "<p>body</p>")
            .await
            .is_err());
    }
}
