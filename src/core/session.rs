//! Mutable state owned by the live countdown.
//!
//! The session keeps the current raw inputs and the schedule derived from
//! them. The schedule is rebuilt only when the inputs are replaced or the
//! calendar date rolls over; a tick just re-classifies the clock sample and
//! never touches the disk.

use crate::core::logic::Core;
use crate::errors::InputError;
use crate::models::evaluation::Evaluation;
use crate::models::schedule::{ScheduleInput, WorkdaySchedule};
use chrono::{NaiveDate, NaiveDateTime};

pub struct LiveSession {
    input: ScheduleInput,
    schedule: Option<Result<WorkdaySchedule, InputError>>,
    anchored_on: Option<NaiveDate>,
    rebuilds: u64,
}

impl LiveSession {
    pub fn new(input: ScheduleInput) -> Self {
        Self {
            input,
            schedule: None,
            anchored_on: None,
            rebuilds: 0,
        }
    }

    pub fn input(&self) -> &ScheduleInput {
        &self.input
    }

    /// How many times the schedule has been rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Replace the inputs (an edit). The schedule is rebuilt on next tick.
    /// Returns `false` when nothing changed.
    pub fn set_input(&mut self, input: ScheduleInput) -> bool {
        if input == self.input {
            return false;
        }
        self.input = input;
        self.schedule = None;
        true
    }

    /// Evaluate the session at `now`.
    pub fn tick(&mut self, now: NaiveDateTime) -> Evaluation {
        let today = now.date();
        if self.anchored_on != Some(today) {
            self.schedule = None;
        }

        let schedule = match &self.schedule {
            Some(s) => s.clone(),
            None => {
                let built = Core::build_schedule(now, &self.input);
                self.rebuilds += 1;
                self.anchored_on = Some(today);
                self.schedule = Some(built.clone());
                built
            }
        };

        match schedule {
            Ok(schedule) => Evaluation::Ready {
                status: schedule.status_at(now),
                schedule,
            },
            Err(e) => Evaluation::Waiting(e),
        }
    }
}
