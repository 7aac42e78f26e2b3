#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use punch::libs::formatter::{format_duration, format_timestamp};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "0 hours 00 minutes 00 seconds");
    }

    #[test]
    fn test_format_duration_minutes_and_seconds() {
        assert_eq!(format_duration(&Duration::seconds(30)), "0 hours 00 minutes 30 seconds");
        assert_eq!(format_duration(&Duration::minutes(5)), "0 hours 05 minutes 00 seconds");
        assert_eq!(format_duration(&Duration::seconds(59 * 60 + 59)), "0 hours 59 minutes 59 seconds");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(&Duration::hours(1)), "1 hours 00 minutes 00 seconds");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "8 hours 45 minutes 00 seconds");
        assert_eq!(format_duration(&Duration::seconds(3661)), "1 hours 01 minutes 01 seconds");
    }

    #[test]
    fn test_format_duration_large_values() {
        assert_eq!(format_duration(&Duration::hours(24)), "24 hours 00 minutes 00 seconds");
        assert_eq!(format_duration(&Duration::hours(100)), "100 hours 00 minutes 00 seconds");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "0 hours 00 minutes 00 seconds");
        assert_eq!(format_duration(&Duration::hours(-5)), "0 hours 00 minutes 00 seconds");
    }

    #[test]
    fn test_format_duration_consistency() {
        let a = Duration::hours(2) + Duration::minutes(30);
        let b = Duration::minutes(150);
        assert_eq!(format_duration(&a), format_duration(&b));
    }

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_timestamp(&ts), "06/02 09:05:07");

        let midnight = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&midnight), "12/31 00:00:00");
    }
}
