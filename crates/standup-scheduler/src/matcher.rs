//! Pure time matching: does a standup fire at this minute?
//!
//! Everything here is a function of its arguments, so tests drive it
//! with simulated timestamps. The once-per-minute loop cadence is what
//! makes an hour/minute equality check fire exactly once per
//! occurrence; the functions themselves are idempotent.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};

use crate::standups::StandupTime;

/// Default warning lead time, in minutes.
pub const DEFAULT_WARNING_MINUTES: u32 = 10;

/// True iff the standup is due at this very minute.
pub fn fires_main(now: NaiveDateTime, time: StandupTime) -> bool {
    now.hour() == time.hour() && now.minute() == time.minute()
}

/// True iff the standup is due `offset` from now. The offset is added
/// to the full timestamp before comparing, so an hour or day rollover
/// (23:55 + 10min = 00:05 next day) matches correctly.
pub fn fires_warning(now: NaiveDateTime, time: StandupTime, offset: Duration) -> bool {
    fires_main(now + offset, time)
}

/// Monday through Friday.
pub fn is_weekday(now: NaiveDateTime) -> bool {
    !matches!(now.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        // 2026-08-31 is a Monday.
        NaiveDate::from_ymd_opt(2026, 8, 31)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn time(hour: u32, minute: u32) -> StandupTime {
        StandupTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_fires_main_at_its_own_minute_for_every_time_of_day() {
        for hour in 0..24 {
            for minute in 0..60 {
                assert!(fires_main(at(hour, minute), time(hour, minute)));
            }
        }
    }

    #[test]
    fn test_fires_main_requires_both_fields() {
        let t = time(9, 30);
        assert!(!fires_main(at(9, 31), t));
        assert!(!fires_main(at(9, 29), t));
        assert!(!fires_main(at(10, 30), t));
        assert!(!fires_main(at(8, 30), t));
        assert!(!fires_main(at(21, 30), t));
    }

    #[test]
    fn test_fires_main_ignores_seconds() {
        let now = NaiveDate::from_ymd_opt(2026, 8, 31)
            .unwrap()
            .and_hms_opt(9, 30, 42)
            .unwrap();
        assert!(fires_main(now, time(9, 30)));
    }

    #[test]
    fn test_warning_is_main_shifted_by_the_offset() {
        let offset = Duration::minutes(10);
        for (h, m) in [(0, 0), (8, 55), (9, 20), (12, 0), (23, 50), (23, 55)] {
            for (th, tm) in [(0, 5), (9, 30), (12, 10), (0, 0)] {
                let now = at(h, m);
                let t = time(th, tm);
                assert_eq!(
                    fires_warning(now, t, offset),
                    fires_main(now + offset, t),
                    "now {h}:{m}, standup {th}:{tm}"
                );
            }
        }
    }

    #[test]
    fn test_warning_fires_ten_minutes_ahead() {
        let offset = Duration::minutes(10);
        assert!(fires_warning(at(9, 20), time(9, 30), offset));
        assert!(!fires_warning(at(9, 30), time(9, 30), offset));
        assert!(!fires_warning(at(9, 21), time(9, 30), offset));
    }

    #[test]
    fn test_warning_rolls_over_midnight() {
        // 23:55 + 10min lands at 00:05 the next day.
        let offset = Duration::minutes(10);
        assert!(fires_warning(at(23, 55), time(0, 5), offset));
        assert!(!fires_warning(at(23, 55), time(23, 55), offset));
    }

    #[test]
    fn test_warning_rolls_over_the_hour() {
        let offset = Duration::minutes(10);
        assert!(fires_warning(at(8, 55), time(9, 5), offset));
    }

    #[test]
    fn test_is_weekday() {
        let day = |d: u32, hour| {
            NaiveDate::from_ymd_opt(2026, 8, d)
                .unwrap()
                .and_hms_opt(hour, 30, 0)
                .unwrap()
        };
        assert!(is_weekday(day(28, 9))); // Friday
        assert!(!is_weekday(day(29, 9))); // Saturday
        assert!(!is_weekday(day(30, 9))); // Sunday
        assert!(is_weekday(day(31, 9))); // Monday
    }
}
