use crate::core::calculator::status::compute_status;
use crate::models::status::Status;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// The three schedule inputs exactly as the user typed them.
///
/// These strings are what gets persisted: they are never normalized, so a
/// save/load cycle gives back the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub arrival: String,
    pub work_duration: String,
    pub lunch_break: String,
}

impl ScheduleInput {
    pub fn new(
        arrival: impl Into<String>,
        work_duration: impl Into<String>,
        lunch_break: impl Into<String>,
    ) -> Self {
        Self {
            arrival: arrival.into(),
            work_duration: work_duration.into(),
            lunch_break: lunch_break.into(),
        }
    }

    /// Replace the fields for which an override was supplied.
    pub fn with_overrides(
        mut self,
        arrival: Option<&String>,
        work_duration: Option<&String>,
        lunch_break: Option<&String>,
    ) -> Self {
        if let Some(a) = arrival {
            self.arrival = a.clone();
        }
        if let Some(w) = work_duration {
            self.work_duration = w.clone();
        }
        if let Some(l) = lunch_break {
            self.lunch_break = l.clone();
        }
        self
    }
}

/// A validated workday, anchored to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdaySchedule {
    pub arrival: NaiveDateTime,
    pub work: TimeDelta,
    pub lunch: TimeDelta,
    pub departure: NaiveDateTime,
}

impl WorkdaySchedule {
    pub fn status_at(&self, now: NaiveDateTime) -> Status {
        compute_status(now, self.arrival, self.departure)
    }
}
