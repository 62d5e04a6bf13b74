use crate::core::calculator::duration::{lunch_span, work_span};
use crate::core::calculator::{
    compute_departure, compute_status, parse_lunch_minutes, parse_time_of_day, parse_work_hours,
};
use crate::errors::{Field, InputError, InputResult};
use crate::models::evaluation::Evaluation;
use crate::models::schedule::{ScheduleInput, WorkdaySchedule};
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Validate the raw inputs and build today's schedule.
    ///
    /// Blank fields are reported before anything is parsed, in the order
    /// arrival, work duration, lunch break.
    pub fn build_schedule(now: NaiveDateTime, input: &ScheduleInput) -> InputResult<WorkdaySchedule> {
        for (field, value) in [
            (Field::Arrival, &input.arrival),
            (Field::WorkDuration, &input.work_duration),
            (Field::LunchBreak, &input.lunch_break),
        ] {
            if value.trim().is_empty() {
                return Err(InputError::EmptyField(field));
            }
        }

        let arrival = parse_time_of_day(&input.arrival)?;
        let work_hours = parse_work_hours(&input.work_duration)?;
        let lunch_minutes = parse_lunch_minutes(&input.lunch_break)?;

        let departure = compute_departure(now, arrival, work_hours, lunch_minutes)?;

        Ok(WorkdaySchedule {
            arrival: arrival.on(now.date()),
            work: work_span(work_hours)?,
            lunch: lunch_span(lunch_minutes)?,
            departure,
        })
    }

    /// Stateless entry point: inputs + clock sample → departure and status.
    /// Never fails; invalid input yields `Evaluation::Waiting`.
    pub fn evaluate(now: NaiveDateTime, input: &ScheduleInput) -> Evaluation {
        match Self::build_schedule(now, input) {
            Ok(schedule) => Evaluation::Ready {
                status: compute_status(now, schedule.arrival, schedule.departure),
                schedule,
            },
            Err(e) => {
                tracing::debug!(error = %e, "schedule inputs not usable");
                Evaluation::Waiting(e)
            }
        }
    }
}
