// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time conversion.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Length of the approximate year used for ages: 12 months of 30 days.
const APPROX_YEAR_SECS: i64 = 360 * 24 * 60 * 60;

/// Convert platform milliseconds-since-epoch to a timestamp.
///
/// Sub-second precision is discarded (`ms / 1000`, truncating toward zero).
/// Out-of-range values fall back to the Unix epoch.
pub fn from_epoch_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ms / 1000, 0).unwrap_or_default()
}

/// Parse an `MM/DD/YYYY` date as midnight UTC.
pub fn parse_us_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole 360-day "years" elapsed between `since` and `now`.
///
/// Not calendar arithmetic: drifts by about 5 days per year.
pub fn approx_years_between(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed: TimeDelta = now - since;
    elapsed.num_seconds() / APPROX_YEAR_SECS
}

/// Calendar day of a timestamp as `YYYY-MM-DD`.
pub fn day_key(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_epoch_millis_drops_subseconds() {
        let ts = from_epoch_millis(1_705_314_600_999);
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_from_epoch_millis_zero_and_negative() {
        assert_eq!(from_epoch_millis(0), DateTime::<Utc>::UNIX_EPOCH);
        // Truncation toward zero: -1500ms is -1s, not -2s.
        assert_eq!(from_epoch_millis(-1_500).timestamp(), -1);
    }

    #[test]
    fn test_from_epoch_millis_out_of_range() {
        assert_eq!(from_epoch_millis(i64::MAX), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_parse_us_date() {
        let dob = parse_us_date("01/15/1990").unwrap();
        assert_eq!(dob, Utc.with_ymd_and_hms(1990, 1, 15, 0, 0, 0).unwrap());

        assert!(parse_us_date("not-a-date").is_none());
        assert!(parse_us_date("").is_none());
        assert!(parse_us_date("1990-01-15").is_none());
        assert!(parse_us_date("13/01/1990").is_none());
    }

    #[test]
    fn test_approx_years_drift() {
        let dob = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();

        // 360 days later already counts as a year.
        let now = dob + TimeDelta::days(360);
        assert_eq!(approx_years_between(dob, now), 1);
        assert_eq!(approx_years_between(dob, now - TimeDelta::seconds(1)), 0);

        // Exactly 24 calendar years is 8766 days, i.e. 24.35 approximate years.
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(approx_years_between(dob, now), 24);

        // 2000-01-01 + 25 * 360 days = 2024-08-22
        let now = Utc.with_ymd_and_hms(2024, 8, 22, 0, 0, 0).unwrap();
        assert_eq!(approx_years_between(dob, now), 25);
    }

    #[test]
    fn test_approx_years_future_date_truncates_toward_zero() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dob = now + TimeDelta::days(100);
        assert_eq!(approx_years_between(dob, now), 0);
    }

    #[test]
    fn test_day_key() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 3, 23, 59, 59).unwrap();
        assert_eq!(day_key(&ts), "2024-01-03");
    }
}
