//! Time utilities: strict HH:MM parsing and formatting of spans.

use crate::errors::{Field, InputError, InputResult};
use crate::models::time_of_day::TimeOfDay;
use chrono::{NaiveDateTime, TimeDelta};
use regex::Regex;
use std::sync::LazyLock;

static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("valid HH:MM regex"));

/// Parse a 24-hour "HH:MM" string.
///
/// Exactly two digits for hour and minute are required ("9:05" and "09:5"
/// are rejected). Blank input is reported as an empty field.
pub fn parse_time_of_day(text: &str) -> InputResult<TimeOfDay> {
    let t = text.trim();
    if t.is_empty() {
        return Err(InputError::EmptyField(Field::Arrival));
    }

    let caps = HH_MM
        .captures(t)
        .ok_or_else(|| InputError::InvalidFormat(t.to_string()))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| InputError::InvalidFormat(t.to_string()))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| InputError::InvalidFormat(t.to_string()))?;

    TimeOfDay::new(hour, minute).ok_or_else(|| InputError::InvalidFormat(t.to_string()))
}

/// "HH:MM" of a timestamp.
pub fn format_hm(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// Remaining time as "8h 30m" (seconds are truncated).
pub fn format_remaining(span: TimeDelta) -> String {
    let total = span.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Remaining time as a "HH:MM:SS" countdown.
pub fn format_countdown(span: TimeDelta) -> String {
    let total = span.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
