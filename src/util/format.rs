//! Display formatting for timestamps and durations.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc, Weekday};

/// Placeholder for a missing value.
pub const EMPTY: &str = "—";

/// History row timestamp: `dd.mm.yyyy hh:mm:ss`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Validity bound of a grant: `dd.mm.yyyy hh:mm`.
pub fn format_validity<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%d.%m.%Y %H:%M").to_string()
}

/// Server timestamp shown in the browser's time zone.
pub fn local(at: &DateTime<Utc>) -> DateTime<Local> {
    at.with_timezone(&Local)
}

pub fn timestamp_or_empty(at: Option<&DateTime<Utc>>) -> String {
    at.map_or_else(|| EMPTY.to_owned(), |at| format_timestamp(&local(at)))
}

pub fn validity_or_empty(at: Option<&DateTime<Utc>>) -> String {
    at.map_or_else(|| EMPTY.to_owned(), |at| format_validity(&local(at)))
}

/// How long a vehicle has been parked: `Xd Yh Zm`, `Yh Zm` or `Zm`.
pub fn format_parked_duration(entered_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes_total = (now - entered_at).num_minutes().max(0);
    let days = minutes_total / (24 * 60);
    let hours = minutes_total / 60 % 24;
    let minutes = minutes_total % 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Short Slovak day label for a `YYYY-MM-DD` key, e.g. `po 3.`.
///
/// Keys that do not parse are shown verbatim.
pub fn day_label(iso_date: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") else {
        return iso_date.to_owned();
    };
    let weekday = match date.weekday() {
        Weekday::Mon => "po",
        Weekday::Tue => "ut",
        Weekday::Wed => "st",
        Weekday::Thu => "št",
        Weekday::Fri => "pi",
        Weekday::Sat => "so",
        Weekday::Sun => "ne",
    };
    format!("{weekday} {}.", date.day())
}
