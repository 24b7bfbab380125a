//! Show start times: parsing, past/upcoming classification and display formatting
//!
//! Start times are stored as naive local datetimes (`YYYY-MM-DD HH:MM:SS`).
//! A show is upcoming when its start date is strictly after today; a show
//! starting today already counts as past.

use std::fmt::Write;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use crate::{Error, Result};

/// Storage format for `show.start_time`
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `EE MM, dd, y h:mma`
const MEDIUM_FORMAT: &str = "%a %m, %d, %Y %-I:%M%p";

/// `EEEE MMMM, d, y 'at' h:mma`
const FULL_FORMAT: &str = "%A %B, %-d, %Y at %-I:%M%p";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time truncated to whole seconds
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Parse a start time as entered in a form or read from storage
///
/// Accepts `YYYY-MM-DD HH:MM[:SS[.fff]]`, the same with a `T` separator
/// (optionally suffixed with `Z`), or a bare `YYYY-MM-DD` meaning midnight.
pub fn parse_start_time(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    for format in DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(value);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::InvalidInput(format!("Invalid start time: {:?}", text)))
}

/// True when the show starts on a later day than `today`
pub fn is_upcoming(start_time: NaiveDateTime, today: NaiveDate) -> bool {
    start_time.date() > today
}

/// Split items into `(past, upcoming)` keeping their relative order
pub fn partition_shows<T, F>(items: Vec<T>, today: NaiveDate, start_of: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> NaiveDateTime,
{
    let (upcoming, past): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|item| is_upcoming(start_of(item), today));
    (past, upcoming)
}

/// Format a start time for display
///
/// `"medium"` and `"full"` are the two named page formats; anything else is
/// used as a chrono format string. An invalid pattern falls back to the
/// storage format.
pub fn format_datetime(value: NaiveDateTime, format: &str) -> String {
    let pattern = match format {
        "full" => FULL_FORMAT,
        "medium" => MEDIUM_FORMAT,
        other => other,
    };

    let mut out = String::new();
    if write!(out, "{}", value.format(pattern)).is_err() {
        return value.format(STORAGE_FORMAT).to_string();
    }
    out
}

/// Parse then format; used by the template filter where values arrive as text
pub fn format_datetime_str(value: &str, format: &str) -> Result<String> {
    parse_start_time(value).map(|dt| format_datetime(dt, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, STORAGE_FORMAT).unwrap()
    }

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_storage_format() {
        assert_eq!(parse_start_time("2019-05-21 21:30:00").unwrap(), dt("2019-05-21 21:30:00"));
    }

    #[test]
    fn test_parse_iso_with_zulu_and_fraction() {
        assert_eq!(
            parse_start_time("2019-06-15T23:00:00.000Z").unwrap(),
            dt("2019-06-15 23:00:00")
        );
    }

    #[test]
    fn test_parse_datetime_local_input() {
        // <input type="datetime-local"> omits seconds
        assert_eq!(parse_start_time("2035-04-01T20:00").unwrap(), dt("2035-04-01 20:00:00"));
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        assert_eq!(parse_start_time(" 2035-04-08 ").unwrap(), dt("2035-04-08 00:00:00"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_start_time("next tuesday"), Err(Error::InvalidInput(_))));
        assert!(parse_start_time("").is_err());
    }

    #[test]
    fn test_show_today_is_past() {
        let today = date("2024-03-10");
        assert!(!is_upcoming(dt("2024-03-10 23:59:59"), today));
        assert!(!is_upcoming(dt("2024-03-09 12:00:00"), today));
        assert!(is_upcoming(dt("2024-03-11 00:00:00"), today));
    }

    #[test]
    fn test_partition_keeps_order() {
        let today = date("2024-03-10");
        let shows = vec![
            ("a", dt("2024-03-12 20:00:00")),
            ("b", dt("2024-03-01 20:00:00")),
            ("c", dt("2024-04-01 20:00:00")),
            ("d", dt("2024-03-10 20:00:00")),
        ];

        let (past, upcoming) = partition_shows(shows, today, |s| s.1);
        let past: Vec<_> = past.iter().map(|s| s.0).collect();
        let upcoming: Vec<_> = upcoming.iter().map(|s| s.0).collect();

        assert_eq!(past, vec!["b", "d"]);
        assert_eq!(upcoming, vec!["a", "c"]);
    }

    #[test]
    fn test_format_medium() {
        assert_eq!(format_datetime(dt("2019-05-21 21:30:00"), "medium"), "Tue 05, 21, 2019 9:30PM");
    }

    #[test]
    fn test_format_full() {
        assert_eq!(
            format_datetime(dt("2019-06-05 09:05:00"), "full"),
            "Wednesday June, 5, 2019 at 9:05AM"
        );
    }

    #[test]
    fn test_format_custom_pattern() {
        assert_eq!(format_datetime(dt("2019-06-05 09:05:00"), "%Y/%m/%d"), "2019/06/05");
    }

    #[test]
    fn test_format_invalid_pattern_falls_back() {
        assert_eq!(format_datetime(dt("2019-06-05 09:05:00"), "%Q"), "2019-06-05 09:05:00");
    }

    #[test]
    fn test_format_str_round_trip_from_storage() {
        assert_eq!(
            format_datetime_str("2035-04-15 20:00:00", "medium").unwrap(),
            "Sun 04, 15, 2035 8:00PM"
        );
    }

    #[test]
    fn test_now_has_no_subsecond_part() {
        assert_eq!(now().and_utc().timestamp_subsec_nanos(), 0);
    }
}
