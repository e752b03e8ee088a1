//! Duration and timestamp formatting for report rows.
//!
//! Durations follow the familiar `timedelta` layout that support teams already
//! read in spreadsheets:
//!
//! - under a day → `"H:MM:SS"` (e.g. `"3:15:00"`)
//! - one day or more → `"N day(s), H:MM:SS"` (e.g. `"2 days, 3:15:00"`)
//! - negative durations → `"0:00:00"`
//!
//! Timestamps are written as ISO-8601 in UTC with a `Z` suffix and second
//! precision, e.g. `"2024-01-08T10:00:00Z"`.
//!
//! ## Examples
//!
//! ```rust
//! use response_times::libs::formatter::{format_duration, format_timestamp};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! assert_eq!(format_duration(&Duration::hours(27)), "1 day, 3:00:00");
//! let ts = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
//! assert_eq!(format_timestamp(&ts), "2024-01-08T10:00:00Z");
//! ```

use chrono::{DateTime, Duration, SecondsFormat, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

fn plural_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Formats a duration as `"H:MM:SS"`, prefixed with the day count when it
/// spans at least one day. Negative durations are clamped to zero.
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    let days = total / SECONDS_PER_DAY;
    let rest = total % SECONDS_PER_DAY;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    if days > 0 {
        format!("{}, {}", plural_days(days), clock)
    } else {
        clock
    }
}

/// Formats the weekend term of a formula.
///
/// A whole number of days reads as `"2 days"`; anything else falls back to
/// [`format_duration`].
pub fn format_exclusion(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    if total > 0 && total % SECONDS_PER_DAY == 0 {
        plural_days(total / SECONDS_PER_DAY)
    } else {
        format_duration(duration)
    }
}

/// Formats a UTC timestamp as ISO-8601 with a `Z` suffix.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
