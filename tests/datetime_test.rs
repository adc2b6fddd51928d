use chrono::{Duration, Local, NaiveDate, Weekday};
use gardenist::utils::datetime::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_format_date_returns_non_empty_text() {
    for input in ["2025-01-15", "2025-01-15T09:30:00", "2025-01-15 09:30:00", "1736899200"] {
        let formatted = format_date(input);
        assert!(!formatted.is_empty(), "empty output for {input}");
        assert_ne!(formatted, INVALID_DATE, "unexpected sentinel for {input}");
    }
}

#[test]
fn test_format_date_is_idempotent() {
    let first = format_date("2025-01-15");
    let second = format_date("2025-01-15");
    assert_eq!(first, second);
}

#[test]
fn test_format_date_uses_display_format() {
    assert_eq!(format_date("2025-01-15"), "Jan 15, 2025");
    assert_eq!(format_date_with("2025-01-15", "%d/%m/%Y"), "15/01/2025");
}

#[test]
fn test_format_date_invalid_input_degrades_to_sentinel() {
    assert_eq!(format_date("not a date"), "Invalid Date");
    assert_eq!(format_date(""), "Invalid Date");
    assert_eq!(format_date("2025-13-45"), "Invalid Date");
}

#[test]
fn test_format_date_rfc3339() {
    // Date component survives the timezone conversion for a midday timestamp
    let formatted = format_date("2025-06-15T12:00:00Z");
    assert!(formatted.contains("Jun"), "got {formatted}");
    assert!(formatted.contains("2025"), "got {formatted}");
}

#[test]
fn test_next_weekday() {
    let monday = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(); // Monday
    let friday = next_weekday(monday, Weekday::Fri);
    assert_eq!(friday, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
}

#[test]
fn test_next_weekday_same_day() {
    let monday = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(); // Monday
    let next_monday = next_weekday(monday, Weekday::Mon);
    let expected = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // Next Monday (7 days later)
    assert_eq!(next_monday, expected);
}

#[test]
fn test_format_human_date_today() {
    let today = Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(format_human_date(&today), "today");
}

#[test]
fn test_format_human_date_tomorrow() {
    let tomorrow = (Local::now() + Duration::days(1)).format("%Y-%m-%d").to_string();
    assert_eq!(format_human_date(&tomorrow), "tomorrow");
}

#[test]
fn test_format_human_date_yesterday() {
    let yesterday = (Local::now() - Duration::days(1)).format("%Y-%m-%d").to_string();
    assert_eq!(format_human_date(&yesterday), "yesterday");
}

#[test]
fn test_format_human_date_unparseable_passes_through() {
    assert_eq!(format_human_date("someday"), "someday");
}

#[test]
fn test_format_human_datetime_iso_format() {
    let datetime_str = "2025-09-16T09:00:00";
    let formatted = format_human_datetime(datetime_str);

    // Should contain time information and be human-readable
    assert!(formatted.contains("at"));
    assert!(formatted.contains("09:00"));
}

#[test]
fn test_format_today_parses_back() {
    let today = format_today();
    assert!(parse_date(&today).is_ok());
}

#[test]
fn test_format_date_with_offset() {
    let tomorrow = format_date_with_offset(1);
    let expected = (Local::now() + Duration::days(1)).format("%Y-%m-%d").to_string();
    assert_eq!(tomorrow, expected);
}
