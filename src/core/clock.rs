//! US Eastern wall-clock formatting for file timestamps.
//!
//! The dashboard shows "last updated" in Eastern time regardless of where the
//! export ran. US rules since 2007: daylight time from 02:00 on the second
//! Sunday of March until 02:00 on the first Sunday of November.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};

const EST_OFFSET_HOURS: i64 = -5;
const EDT_OFFSET_HOURS: i64 = -4;

/// Convert a UTC instant to Eastern local time and its zone abbreviation.
pub fn to_eastern(utc: DateTime<Utc>) -> (NaiveDateTime, &'static str) {
    let (offset, abbrev) = if is_eastern_dst(utc) {
        (EDT_OFFSET_HOURS, "EDT")
    } else {
        (EST_OFFSET_HOURS, "EST")
    };
    (utc.naive_utc() + Duration::hours(offset), abbrev)
}

/// `YYYY-MM-DD HH:MM:SS EST|EDT`
pub fn format_eastern(utc: DateTime<Utc>) -> String {
    let (local, abbrev) = to_eastern(utc);
    format!("{} {}", local.format("%Y-%m-%d %H:%M:%S"), abbrev)
}

fn is_eastern_dst(utc: DateTime<Utc>) -> bool {
    let year = utc.year();
    let (Some(start), Some(end)) = (
        nth_sunday(year, 3, 2).and_then(|d| d.and_hms_opt(7, 0, 0)),
        nth_sunday(year, 11, 1).and_then(|d| d.and_hms_opt(6, 0, 0)),
    ) else {
        return false;
    };
    let now = utc.naive_utc();
    now >= start && now < end
}

fn nth_sunday(year: i32, month: u32, n: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, n as u8)
}
