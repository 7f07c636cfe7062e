#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wlr::api::WorklogRecord;
    use wlr::libs::date_range::DateRange;
    use wlr::libs::worklog::{accept_worklog, parse_account_ids, started_date};

    const ACCOUNT: &str = "acc-123";

    fn record(author_id: Option<&str>, started: Option<&str>) -> WorklogRecord {
        WorklogRecord {
            author_id: author_id.map(str::to_string),
            started: started.map(str::to_string),
            time_spent_seconds: 3600,
            comment: None,
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_accepts_matching_author_in_range() {
        let log = record(Some(ACCOUNT), Some("2026-08-15T09:30:00.000+0000"));
        let date = accept_worklog(&log, ACCOUNT, &range());
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()));
    }

    #[test]
    fn test_rejects_foreign_author_even_when_listed() {
        // The listing endpoint returns every worklog on the issue; a record
        // from another author must be dropped here
        let log = record(Some("someone-else"), Some("2026-08-15T09:30:00.000+0000"));
        assert!(accept_worklog(&log, ACCOUNT, &range()).is_none());
    }

    #[test]
    fn test_rejects_missing_author() {
        let log = record(None, Some("2026-08-15T09:30:00.000+0000"));
        assert!(accept_worklog(&log, ACCOUNT, &range()).is_none());
    }

    #[test]
    fn test_rejects_missing_or_unparseable_started() {
        assert!(accept_worklog(&record(Some(ACCOUNT), None), ACCOUNT, &range()).is_none());
        assert!(accept_worklog(&record(Some(ACCOUNT), Some("not-a-date")), ACCOUNT, &range()).is_none());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let first = record(Some(ACCOUNT), Some("2026-08-01T00:00:00.000+0000"));
        let last = record(Some(ACCOUNT), Some("2026-08-31T23:59:00.000+0000"));
        let before = record(Some(ACCOUNT), Some("2026-07-31T23:59:00.000+0000"));
        let after = record(Some(ACCOUNT), Some("2026-09-01T00:00:00.000+0000"));
        assert!(accept_worklog(&first, ACCOUNT, &range()).is_some());
        assert!(accept_worklog(&last, ACCOUNT, &range()).is_some());
        assert!(accept_worklog(&before, ACCOUNT, &range()).is_none());
        assert!(accept_worklog(&after, ACCOUNT, &range()).is_none());
    }

    #[test]
    fn test_started_date_uses_calendar_portion_only() {
        let log = record(Some(ACCOUNT), Some("2026-08-15T23:59:59.999+1400"));
        assert_eq!(started_date(&log), Some(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()));
    }

    #[test]
    fn test_parse_account_ids_valid() {
        let ids = parse_account_ids(r#"["acc-1", "acc-2"]"#).unwrap();
        assert_eq!(ids, vec!["acc-1".to_string(), "acc-2".to_string()]);
    }

    #[test]
    fn test_parse_account_ids_rejects_invalid_json() {
        assert!(parse_account_ids("").is_err());
        assert!(parse_account_ids("acc-1,acc-2").is_err());
        assert!(parse_account_ids("{\"id\": 1}").is_err());
    }

    #[test]
    fn test_parse_account_ids_rejects_empty_list() {
        assert!(parse_account_ids("[]").is_err());
    }
}
