use crate::core::calculator::duration::{lunch_span, work_span};
use crate::errors::{Field, InputError, InputResult};
use crate::models::time_of_day::TimeOfDay;
use chrono::NaiveDateTime;

const OUT_OF_RANGE: &str = "departure is out of range";

/// Departure = arrival (anchored to the date of `now`) + work + lunch.
///
/// The result may fall on the following day; it is returned as is.
pub fn compute_departure(
    now: NaiveDateTime,
    arrival: TimeOfDay,
    work_hours: f64,
    lunch_minutes: i64,
) -> InputResult<NaiveDateTime> {
    let work = work_span(work_hours)?;
    let lunch = lunch_span(lunch_minutes)?;

    let after_work = arrival
        .on(now.date())
        .checked_add_signed(work)
        .ok_or_else(|| InputError::invalid(Field::WorkDuration, work_hours.to_string(), OUT_OF_RANGE))?;

    after_work.checked_add_signed(lunch).ok_or_else(|| {
        InputError::invalid(Field::LunchBreak, lunch_minutes.to_string(), OUT_OF_RANGE)
    })
}
