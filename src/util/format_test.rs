use super::*;

use chrono::Duration;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn timestamp_uses_day_first_with_seconds() {
    assert_eq!(format_timestamp(&at(2025, 3, 7, 9, 4, 5)), "07.03.2025 09:04:05");
    assert_eq!(format_validity(&at(2025, 12, 31, 23, 59, 0)), "31.12.2025 23:59");
}

#[test]
fn missing_timestamp_renders_placeholder() {
    assert_eq!(timestamp_or_empty(None), EMPTY);
    assert_eq!(validity_or_empty(None), EMPTY);
}

#[test]
fn parked_duration_picks_largest_unit() {
    let entered = at(2025, 3, 1, 8, 0, 0);
    assert_eq!(format_parked_duration(entered, entered + Duration::minutes(42)), "42m");
    assert_eq!(format_parked_duration(entered, entered + Duration::minutes(125)), "2h 5m");
    assert_eq!(
        format_parked_duration(entered, entered + Duration::days(3) + Duration::hours(4) + Duration::minutes(1)),
        "3d 4h 1m"
    );
    assert_eq!(format_parked_duration(entered, entered + Duration::days(1)), "1d 0h 0m");
}

#[test]
fn parked_duration_clamps_clock_skew() {
    let entered = at(2025, 3, 1, 8, 0, 0);
    assert_eq!(format_parked_duration(entered, entered - Duration::minutes(5)), "0m");
}

#[test]
fn day_label_is_short_slovak_weekday() {
    assert_eq!(day_label("2025-03-03"), "po 3.");
    assert_eq!(day_label("2025-03-06"), "št 6.");
    assert_eq!(day_label("yesterday"), "yesterday");
}
