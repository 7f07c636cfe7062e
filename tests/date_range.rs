#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wlr::libs::date_range::{current_month_range, previous_month_range, previous_week_range, DateRange};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_current_month_range() {
        let range = current_month_range(date(2026, 8, 26));
        assert_eq!(range.from, date(2026, 8, 1));
        assert_eq!(range.to, date(2026, 8, 31));
    }

    #[test]
    fn test_current_month_range_february_leap_year() {
        let range = current_month_range(date(2024, 2, 10));
        assert_eq!(range.from, date(2024, 2, 1));
        assert_eq!(range.to, date(2024, 2, 29));
    }

    #[test]
    fn test_current_month_range_december() {
        let range = current_month_range(date(2026, 12, 15));
        assert_eq!(range.from, date(2026, 12, 1));
        assert_eq!(range.to, date(2026, 12, 31));
    }

    #[test]
    fn test_previous_month_range() {
        let range = previous_month_range(date(2026, 8, 26));
        assert_eq!(range.from, date(2026, 7, 1));
        assert_eq!(range.to, date(2026, 7, 31));
    }

    #[test]
    fn test_previous_month_range_january_crosses_year() {
        let range = previous_month_range(date(2026, 1, 5));
        assert_eq!(range.from, date(2025, 12, 1));
        assert_eq!(range.to, date(2025, 12, 31));
    }

    #[test]
    fn test_previous_week_range_from_monday() {
        // 2026-08-24 is a Monday
        let range = previous_week_range(date(2026, 8, 24));
        assert_eq!(range.from, date(2026, 8, 17));
        assert_eq!(range.to, date(2026, 8, 23));
    }

    #[test]
    fn test_previous_week_range_from_midweek() {
        // 2026-08-26 is a Wednesday; same completed week as from Monday
        let range = previous_week_range(date(2026, 8, 26));
        assert_eq!(range.from, date(2026, 8, 17));
        assert_eq!(range.to, date(2026, 8, 23));
    }

    #[test]
    fn test_previous_week_range_from_sunday_skips_running_week() {
        // 2026-08-30 is a Sunday; the week ending that day is still running,
        // so the completed week is Aug 17-23
        let range = previous_week_range(date(2026, 8, 30));
        assert_eq!(range.from, date(2026, 8, 17));
        assert_eq!(range.to, date(2026, 8, 23));
    }

    #[test]
    fn test_previous_week_range_is_always_seven_days_monday_to_sunday() {
        use chrono::{Datelike, Duration, Weekday};
        let start = date(2026, 8, 17);
        for offset in 0..14 {
            let range = previous_week_range(start + Duration::days(offset));
            assert_eq!(range.from.weekday(), Weekday::Mon);
            assert_eq!(range.to.weekday(), Weekday::Sun);
            assert_eq!((range.to - range.from).num_days(), 6);
            assert!(range.to < start + Duration::days(offset));
        }
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::single_day(date(2026, 8, 25));
        assert_eq!(range.from, range.to);
        assert!(range.is_single_day());
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(DateRange::new(date(2026, 8, 26), date(2026, 8, 25)).is_err());
        assert!(DateRange::new(date(2026, 8, 25), date(2026, 8, 25)).is_ok());
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let range = DateRange::new(date(2026, 8, 10), date(2026, 8, 20)).unwrap();
        assert!(range.contains(date(2026, 8, 10)));
        assert!(range.contains(date(2026, 8, 20)));
        assert!(!range.contains(date(2026, 8, 9)));
        assert!(!range.contains(date(2026, 8, 21)));
    }
}
