//! Date and time utility functions
//!
//! This module provides functions for date parsing and human-readable
//! formatting, the way garden records display them (e.g. "today",
//! "3 days ago", "Apr 12").

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Weekday};

/// Standard date format used for stored garden records
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short display format used when no configured format applies
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Sentinel text returned when a date value cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, STORAGE_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(STORAGE_DATE_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Format date with offset from today to YYYY-MM-DD string
pub fn format_date_with_offset(days_offset: i64) -> String {
    let target_date = Local::now().date_naive() + Duration::days(days_offset);
    format_ymd(target_date)
}

/// Calculate the next occurrence of a target weekday from a given date
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from + Duration::days(delta)
}

/// Interpret a date-like input string as a local date.
///
/// Accepts, in order of preference: RFC 3339 datetimes, ISO 8601 datetimes
/// without timezone, space-separated datetimes, plain YYYY-MM-DD dates, and
/// integer Unix timestamps.
fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    if let Ok(dt) =
        chrono::NaiveDateTime::parse_from_str(input, &format!("{}T%H:%M:%S", STORAGE_DATE_FORMAT))
    {
        return Some(dt.date());
    }

    if let Ok(dt) =
        chrono::NaiveDateTime::parse_from_str(input, &format!("{} %H:%M:%S", STORAGE_DATE_FORMAT))
    {
        return Some(dt.date());
    }

    if let Ok(date) = parse_date(input) {
        return Some(date);
    }

    if let Ok(secs) = input.parse::<i64>() {
        if let Some(dt) = DateTime::from_timestamp(secs, 0) {
            return Some(dt.with_timezone(&Local).date_naive());
        }
    }

    None
}

/// Format any date-like input string into a short display date.
///
/// Unparseable input degrades to the [`INVALID_DATE`] sentinel rather than
/// an error; callers on the display path never have to handle a failure.
pub fn format_date(input: &str) -> String {
    format_date_with(input, DISPLAY_DATE_FORMAT)
}

/// Format any date-like input string using a configured chrono format
pub fn format_date_with(input: &str, format: &str) -> String {
    match parse_date_input(input) {
        Some(date) => date.format(format).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a date string in human-readable relative form
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `String` - Human-readable date format
pub fn format_human_date(date_str: &str) -> String {
    // Parse the input date string
    let input_date = match parse_date(date_str) {
        Ok(date) => date,
        Err(_) => return date_str.to_string(), // Return original if parsing fails
    };

    let now = Local::now();
    let today = now.date_naive();

    let days_diff = (input_date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => {
            let weekday = input_date.weekday();
            format!("next {}", weekday_name(weekday))
        }
        diff if (-7..-1).contains(&diff) => {
            let weekday = input_date.weekday();
            format!("last {}", weekday_name(weekday))
        }
        diff if diff > 7 && diff <= 30 => {
            format!("in {} days", diff)
        }
        diff if (-30..-7).contains(&diff) => {
            format!("{} days ago", -diff)
        }
        _ => {
            // For dates further out, show the actual date
            let current_year = today.year();
            let input_year = input_date.year();

            if input_year == current_year {
                input_date.format("%b %d").to_string()
            } else {
                input_date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Format a datetime string in human-readable relative form with time
pub fn format_human_datetime(datetime_str: &str) -> String {
    // Try multiple datetime parsing strategies
    let parsed_dt = if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        Some(dt.with_timezone(&Local))
    } else if let Ok(dt) =
        chrono::NaiveDateTime::parse_from_str(datetime_str, &format!("{}T%H:%M:%S", STORAGE_DATE_FORMAT))
    {
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else if let Ok(dt) =
        chrono::NaiveDateTime::parse_from_str(datetime_str, &format!("{} %H:%M:%S", STORAGE_DATE_FORMAT))
    {
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else {
        None
    };

    if let Some(local_dt) = parsed_dt {
        let date_str = local_dt.format(STORAGE_DATE_FORMAT).to_string();
        let time_str = local_dt.format("%H:%M").to_string();

        let human_date = format_human_date(&date_str);

        format!("{} at {}", human_date, time_str)
    } else {
        // Fallback to date-only parsing
        format_human_date(datetime_str)
    }
}

/// Current calendar year for new garden records
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
