//! Due-date interpretation.
//!
//! Due dates are stored as the client sent them. They are only interpreted
//! when a calendar date is needed, always in the server's local time zone.
//! Accepted forms are `YYYY-MM-DD`, optionally followed by `T`, `t` or a space
//! and a time of `HH`, `HH:MM` or `HH:MM:SS[.fff]`:
//!
//! - with an offset (`Z`, `+HH:MM`, `+HHMM`, `+HH`): converted to local time
//! - without an offset (`2024-01-01T10:30:00`, `2024-01-01 10:30`): already local
//! - date only (`2024-01-01`): that local date

use chrono::{FixedOffset, Local, NaiveDate, NaiveTime, TimeZone};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Local calendar date of a due date, or `None` if it cannot be read.
#[must_use]
pub fn local_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    let Some((date, time)) = split_date_time(raw) else {
        return NaiveDate::parse_from_str(raw, DATE_FORMAT).ok();
    };

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let (clock, offset) = split_offset(time)?;
    let local = date.and_time(parse_clock(clock)?);

    match offset {
        None => Some(local.date()),
        Some(offset) => offset
            .from_local_datetime(&local)
            .single()
            .map(|instant| instant.with_timezone(&Local).date_naive()),
    }
}

/// Unreadable due dates are never due.
#[must_use]
pub fn is_due_on(raw: &str, day: NaiveDate) -> bool {
    local_calendar_date(raw) == Some(day)
}

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn split_date_time(raw: &str) -> Option<(&str, &str)> {
    let (date, rest) = raw.split_at_checked(10)?;
    let time = rest.strip_prefix(['T', 't', ' '])?;
    Some((date, time))
}

fn split_offset(time: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(clock) = time.strip_suffix(['Z', 'z']) {
        return Some((clock, Some(FixedOffset::east_opt(0)?)));
    }
    match time.find(['+', '-']) {
        None => Some((time, None)),
        Some(at) => {
            let (clock, offset) = time.split_at(at);
            Some((clock, Some(parse_offset(offset)?)))
        }
    }
}

/// `+HH:MM`, `+HHMM` or `+HH` (and the `-` forms).
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    let (sign, digits) = match offset.split_at_checked(1)? {
        ("+", digits) => (1, digits),
        ("-", digits) => (-1, digits),
        _ => return None,
    };
    if !digits.is_ascii() {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits, "00"),
        4 => digits.split_at(2),
        5 if digits.as_bytes()[2] == b':' => (&digits[..2], &digits[3..]),
        _ => return None,
    };
    let hours = parse_two_digits(hours).filter(|h| *h < 24)?;
    let minutes = parse_two_digits(minutes).filter(|m| *m < 60)?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_clock(clock: &str) -> Option<NaiveTime> {
    if clock.len() == 2 {
        let hour = parse_two_digits(clock)?;
        return NaiveTime::from_hms_opt(u32::try_from(hour).ok()?, 0, 0);
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(clock, fmt).ok())
}

fn parse_two_digits(digits: &str) -> Option<i32> {
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
