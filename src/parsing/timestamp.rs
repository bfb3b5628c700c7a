//! Timestamp construction from raw header tokens.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use super::DateFormat;
use super::header::Header;

fn re_time() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?\s?([AaPp][Mm])?$")
            .expect("time regex is valid")
    })
}

/// Expands a two-digit year: `70..=99` map to the 1900s, `00..=69` to the 2000s.
pub fn expand_year(year: u32) -> i32 {
    let year = year as i32;
    match year {
        0..=69 => year + 2000,
        70..=99 => year + 1900,
        _ => year,
    }
}

/// Parses a time-of-day token.
///
/// Accepts `H:MM`, `H:MM:SS` and an optional AM/PM marker. Returns `None`
/// when the token doesn't fit or names an impossible time.
pub fn parse_time_of_day(token: &str) -> Option<NaiveTime> {
    let caps = re_time().captures(token.trim())?;

    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    let second: u32 = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;

    if let Some(marker) = caps.get(4) {
        let pm = marker.as_str().eq_ignore_ascii_case("pm");
        if pm && hour != 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Builds a naive local timestamp from header tokens.
///
/// `first` and `second` are the date tokens in the order they were written;
/// under [`DateFormat::MonthFirst`] they are swapped before construction.
/// An unparseable time falls back to midnight. Returns `None` only when the
/// calendar date is impossible (e.g. 31 February), leaving the decision to
/// drop the record to the caller.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::{DateFormat, build_timestamp};
/// use chrono::NaiveDate;
///
/// let ts = build_timestamp(1, 2, 23, "9:05 AM", DateFormat::DayFirst).unwrap();
/// assert_eq!(ts, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(9, 5, 0).unwrap());
///
/// assert!(build_timestamp(31, 2, 2024, "10:00", DateFormat::DayFirst).is_none());
/// ```
pub fn build_timestamp(
    first: u32,
    second: u32,
    year: u32,
    time: &str,
    format: DateFormat,
) -> Option<NaiveDateTime> {
    assemble(first, second, expand_year(year), time, format)
}

/// Full year named by a header's year token.
///
/// Only a token written with two digits is expanded; `0024` is year 24.
pub fn header_year(token: &str) -> Option<i32> {
    let value: u32 = token.parse().ok()?;
    if token.len() <= 2 {
        Some(expand_year(value))
    } else {
        i32::try_from(value).ok()
    }
}

/// Builds the timestamp of a matched header.
pub fn header_timestamp(header: &Header<'_>, format: DateFormat) -> Option<NaiveDateTime> {
    let (first, second) = header.date_tokens()?;
    let year = header_year(header.year)?;
    assemble(first, second, year, &header.time, format)
}

fn assemble(
    first: u32,
    second: u32,
    year: i32,
    time: &str,
    format: DateFormat,
) -> Option<NaiveDateTime> {
    let (day, month) = match format {
        DateFormat::DayFirst => (first, second),
        DateFormat::MonthFirst => (second, first),
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = parse_time_of_day(time).unwrap_or(NaiveTime::MIN);

    Some(date.and_time(time))
}
