#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wlr::libs::formatter::{format_date_mmddyyyy, format_month, format_time_spent, format_total, parse_time_spent};

    #[test]
    fn test_format_time_spent() {
        assert_eq!(format_time_spent(0), "0h 0m");
        assert_eq!(format_time_spent(60), "0h 1m");
        assert_eq!(format_time_spent(3600), "1h 0m");
        assert_eq!(format_time_spent(7500), "2h 5m");
        assert_eq!(format_time_spent(-30), "0h 0m");
    }

    #[test]
    fn test_format_total_has_no_space() {
        assert_eq!(format_total(0), "0h0m");
        assert_eq!(format_total(7500), "2h5m");
        assert_eq!(format_total(3 * 3600 + 45 * 60), "3h45m");
    }

    #[test]
    fn test_parse_time_spent_round_trip_truncates_to_whole_minutes() {
        // 125 seconds formats as "0h 2m" and parses back as 120
        assert_eq!(parse_time_spent(&format_time_spent(125)), 120);
        // 40 seconds is below a whole minute and comes back as zero
        assert_eq!(parse_time_spent(&format_time_spent(40)), 0);
        // whole-minute values survive unchanged
        assert_eq!(parse_time_spent(&format_time_spent(7500)), 7500);
    }

    #[test]
    fn test_parse_time_spent_malformed_is_zero() {
        assert_eq!(parse_time_spent(""), 0);
        assert_eq!(parse_time_spent("2h5m"), 0);
        assert_eq!(parse_time_spent("garbage"), 0);
    }

    #[test]
    fn test_format_date_mmddyyyy_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(format_date_mmddyyyy(date), "08/03/2026");
        let date = NaiveDate::from_ymd_opt(2026, 11, 25).unwrap();
        assert_eq!(format_date_mmddyyyy(date), "11/25/2026");
    }

    #[test]
    fn test_format_month() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        assert_eq!(format_month(date), "Aug 2026");
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_month(date), "Dec 2025");
    }
}
