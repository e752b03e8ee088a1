#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use response_times::libs::formatter::{format_duration, format_exclusion, format_timestamp};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "0:00:00");
    }

    #[test]
    fn test_format_duration_under_a_day() {
        assert_eq!(format_duration(&Duration::seconds(59)), "0:00:59");
        assert_eq!(format_duration(&Duration::minutes(45)), "0:45:00");
        assert_eq!(format_duration(&(Duration::hours(3) + Duration::minutes(15))), "3:15:00");
        assert_eq!(format_duration(&(Duration::hours(23) + Duration::seconds(3599))), "23:59:59");
    }

    #[test]
    fn test_format_duration_days() {
        assert_eq!(format_duration(&Duration::days(1)), "1 day, 0:00:00");
        assert_eq!(format_duration(&(Duration::days(2) + Duration::hours(3) + Duration::minutes(15))), "2 days, 3:15:00");
        assert_eq!(format_duration(&Duration::hours(30)), "1 day, 6:00:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "0:00:00");
        assert_eq!(format_duration(&Duration::days(-2)), "0:00:00");
    }

    #[test]
    fn test_format_exclusion_whole_days() {
        assert_eq!(format_exclusion(&Duration::days(1)), "1 day");
        assert_eq!(format_exclusion(&Duration::hours(48)), "2 days");
    }

    #[test]
    fn test_format_exclusion_partial_days() {
        assert_eq!(format_exclusion(&Duration::hours(6)), "6:00:00");
        assert_eq!(format_exclusion(&Duration::hours(30)), "1 day, 6:00:00");
        assert_eq!(format_exclusion(&Duration::zero()), "0:00:00");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-08T10:00:00Z");
    }
}
