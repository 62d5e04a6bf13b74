//! Parsing of the two duration inputs into spans.

use crate::errors::{Field, InputError, InputResult};
use chrono::TimeDelta;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Parse the work duration in hours ("8", "7.5", "8.0").
pub fn parse_work_hours(text: &str) -> InputResult<f64> {
    let t = text.trim();
    if t.is_empty() {
        return Err(InputError::EmptyField(Field::WorkDuration));
    }

    let hours: f64 = t
        .parse()
        .map_err(|_| InputError::invalid(Field::WorkDuration, t, "not a number"))?;

    validate_work_hours(hours)?;
    Ok(hours)
}

/// Parse the lunch break in whole minutes ("30").
pub fn parse_lunch_minutes(text: &str) -> InputResult<i64> {
    let t = text.trim();
    if t.is_empty() {
        return Err(InputError::EmptyField(Field::LunchBreak));
    }

    let minutes: i64 = t
        .parse()
        .map_err(|_| InputError::invalid(Field::LunchBreak, t, "not a whole number of minutes"))?;

    validate_lunch_minutes(minutes)?;
    Ok(minutes)
}

pub fn validate_work_hours(hours: f64) -> InputResult<()> {
    if !hours.is_finite() {
        return Err(InputError::invalid(
            Field::WorkDuration,
            hours.to_string(),
            "must be a finite number",
        ));
    }
    if hours < 0.0 {
        return Err(InputError::invalid(
            Field::WorkDuration,
            hours.to_string(),
            "must not be negative",
        ));
    }
    Ok(())
}

pub fn validate_lunch_minutes(minutes: i64) -> InputResult<()> {
    if minutes < 0 {
        return Err(InputError::invalid(
            Field::LunchBreak,
            minutes.to_string(),
            "must not be negative",
        ));
    }
    Ok(())
}

/// Work hours as a span, rounded to the nearest millisecond.
pub fn work_span(hours: f64) -> InputResult<TimeDelta> {
    validate_work_hours(hours)?;

    let millis = (hours * MILLIS_PER_HOUR).round();
    if millis >= i64::MAX as f64 {
        return Err(InputError::invalid(
            Field::WorkDuration,
            hours.to_string(),
            "is too large",
        ));
    }

    TimeDelta::try_milliseconds(millis as i64)
        .ok_or_else(|| InputError::invalid(Field::WorkDuration, hours.to_string(), "is too large"))
}

pub fn lunch_span(minutes: i64) -> InputResult<TimeDelta> {
    validate_lunch_minutes(minutes)?;
    TimeDelta::try_minutes(minutes)
        .ok_or_else(|| InputError::invalid(Field::LunchBreak, minutes.to_string(), "is too large"))
}
