//! Timestamp handling for reservation segments.
//!
//! Reservations give dates as "YYYY-MM-DD" and times as "HH:MM" without a
//! timezone. Transport segments only carry the departure date, so arrivals
//! that cross midnight need their date advanced.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Format for a calendar date, e.g. `2023-01-05`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format for a date with time of day, e.g. `2023-01-05 20:40`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format for a time of day, e.g. `20:40`.
pub const TIME_FORMAT: &str = "%H:%M";

/// Error returned when parsing an invalid date or time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what} '{input}': {reason}")]
pub struct TimeError {
    what: &'static str,
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn date(input: &str, reason: &'static str) -> Self {
        Self {
            what: "date",
            input: input.to_string(),
            reason,
        }
    }

    fn time(input: &str, reason: &'static str) -> Self {
        Self {
            what: "time",
            input: input.to_string(),
            reason,
        }
    }
}

/// Parse a calendar date in "YYYY-MM-DD" format.
///
/// # Examples
///
/// ```
/// use trip_grouper::domain::parse_date;
///
/// assert!(parse_date("2023-01-05").is_ok());
/// assert!(parse_date("2023-13-01").is_err());
/// assert!(parse_date("2023-02-30").is_err());
/// assert!(parse_date("2023-1-5").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let bytes = s.as_bytes();

    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(TimeError::date(s, "expected YYYY-MM-DD format"));
    }

    let year = parse_digits(&bytes[0..4]).ok_or_else(|| TimeError::date(s, "invalid year"))?;
    let month = parse_digits(&bytes[5..7]).ok_or_else(|| TimeError::date(s, "invalid month"))?;
    let day = parse_digits(&bytes[8..10]).ok_or_else(|| TimeError::date(s, "invalid day"))?;

    if !(1..=12).contains(&month) {
        return Err(TimeError::date(s, "month must be 01-12"));
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| TimeError::date(s, "day does not exist in month"))
}

/// Parse a time of day in "HH:MM" format.
///
/// # Examples
///
/// ```
/// use trip_grouper::domain::parse_hhmm;
///
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
///
/// assert!(parse_hhmm("1430").is_err());
/// assert!(parse_hhmm("25:00").is_err());
/// assert!(parse_hhmm("12:60").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    let bytes = s.as_bytes();

    if bytes.len() != 5 {
        return Err(TimeError::time(s, "expected HH:MM format"));
    }

    if bytes[2] != b':' {
        return Err(TimeError::time(s, "expected colon at position 2"));
    }

    let hour = parse_digits(&bytes[0..2]).ok_or_else(|| TimeError::time(s, "invalid hour"))?;
    if hour > 23 {
        return Err(TimeError::time(s, "hour must be 0-23"));
    }

    let minute = parse_digits(&bytes[3..5]).ok_or_else(|| TimeError::time(s, "invalid minute"))?;
    if minute > 59 {
        return Err(TimeError::time(s, "minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::time(s, "invalid time"))
}

/// Build an arrival timestamp on the departure's calendar date.
///
/// If the arrival time of day is earlier than the departure, the arrival
/// rolled past midnight and is moved to the next calendar day. Returns
/// `None` only if the date would overflow.
///
/// # Examples
///
/// ```
/// use trip_grouper::domain::{arrival_after, parse_date, parse_hhmm};
///
/// let date = parse_date("2023-04-01").unwrap();
/// let departure = date.and_time(parse_hhmm("23:30").unwrap());
///
/// let arrival = arrival_after(departure, parse_hhmm("02:15").unwrap()).unwrap();
/// assert_eq!(arrival.to_string(), "2023-04-02 02:15:00");
/// ```
pub fn arrival_after(departure: NaiveDateTime, arrival: NaiveTime) -> Option<NaiveDateTime> {
    let same_day = departure.date().and_time(arrival);
    if same_day < departure {
        same_day.checked_add_days(Days::new(1))
    } else {
        Some(same_day)
    }
}

/// Parse ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}
