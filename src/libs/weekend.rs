//! Weekend decomposition of a response interval.
//!
//! A response interval `[start, end)` is cut along calendar days in the
//! configured time zone. Every Saturday or Sunday that overlaps the interval
//! contributes the overlapping part of that local day, clipped at the interval
//! boundaries. Days that are only touched at their midnight edge overlap for
//! zero seconds and are left out.
//!
//! Local days are not assumed to last 24 hours: a day ends where the next one
//! starts, so the Sunday of a spring-forward weekend contributes 23 hours.
//!
//! ```text
//!   Fri 10:00                                    Mon 10:00
//!      |------ Fri ------|===== Sat =====|===== Sun =====|-- Mon --|
//!                        ^ 24h excluded  ^ 24h excluded
//! ```

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// A weekend date and the part of it that fell inside a response interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendDay {
    pub date: NaiveDate,
    pub excluded: Duration,
}

pub fn is_weekend(date: &NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// UTC instant at which `date` starts in `tz`.
///
/// Where local midnight falls into a DST gap the day starts at the first
/// valid instant an hour later. `None` only past chrono's date range.
fn day_start(date: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|start| start.with_timezone(&Utc))
}

/// Lists the weekend days overlapping `[start, end)` in chronological order,
/// each with its clipped overlap. Empty when `end <= start`.
pub fn weekend_days(start: DateTime<Utc>, end: DateTime<Utc>, tz: &Tz) -> Vec<WeekendDay> {
    let mut days = Vec::new();
    if end <= start {
        return days;
    }

    let mut date = start.with_timezone(tz).date_naive();
    let Some(mut from) = day_start(date, tz) else {
        return days;
    };
    while from < end {
        let Some(next) = date.succ_opt() else { break };
        let Some(to) = day_start(next, tz) else { break };

        if is_weekend(&date) {
            let excluded = to.min(end) - from.max(start);
            if excluded > Duration::zero() {
                days.push(WeekendDay { date, excluded });
            }
        }

        date = next;
        from = to;
    }

    days
}

/// Total weekend time inside `[start, end)`.
pub fn total_excluded(days: &[WeekendDay]) -> Duration {
    days.iter().fold(Duration::zero(), |acc, day| acc + day.excluded)
}
