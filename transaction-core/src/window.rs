//! UTC time windows for history queries

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive UTC time window `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (inclusive)
    pub start: DateTime<Utc>,

    /// Window end (inclusive)
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create an explicit window
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Sliding window covering the last `days` days up to `as_of`
    pub fn last_days(as_of: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: as_of - Duration::days(days),
            end: as_of,
        }
    }

    /// Calendar day window: midnight UTC of `as_of`'s date up to `as_of`
    pub fn calendar_day(as_of: DateTime<Utc>) -> Self {
        let start = as_of.date_naive().and_time(NaiveTime::MIN).and_utc();
        Self { start, end: as_of }
    }

    /// Calendar month window: day 1 midnight UTC up to `as_of`
    pub fn calendar_month(as_of: DateTime<Utc>) -> Self {
        let date = as_of.date_naive();
        // with_day(1) is always valid for an existing date
        let first = date.with_day(1).unwrap_or(date);
        Self {
            start: first.and_time(NaiveTime::MIN).and_utc(),
            end: as_of,
        }
    }

    /// True if `instant` falls inside the window
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_days_window() {
        let as_of = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let window = TimeWindow::last_days(as_of, 7);

        assert!(window.contains(as_of));
        assert!(window.contains(as_of - Duration::days(7)));
        assert!(!window.contains(as_of - Duration::days(8)));
        assert!(!window.contains(as_of + Duration::seconds(1)));
    }

    #[test]
    fn test_calendar_day_starts_at_midnight_utc() {
        let as_of = Utc.with_ymd_and_hms(2026, 8, 6, 15, 30, 0).unwrap();
        let window = TimeWindow::calendar_day(as_of);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2026, 8, 5, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_calendar_month_starts_on_day_one() {
        let as_of = Utc.with_ymd_and_hms(2026, 8, 6, 15, 30, 0).unwrap();
        let window = TimeWindow::calendar_month(as_of);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2026, 7, 31, 23, 59, 59).unwrap()));
    }
}
