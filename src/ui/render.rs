//! Turns an evaluation into terminal text or JSON.

use crate::models::evaluation::Evaluation;
use crate::models::schedule::ScheduleInput;
use crate::models::status::Status;
use crate::utils::colors::{GREY, color_for_status, paint};
use crate::utils::formatting::{label_line, raw_or_placeholder, separator};
use crate::utils::time::{format_countdown, format_hm, format_remaining};
use chrono::NaiveDateTime;
use serde::Serialize;

const SEPARATOR_WIDTH: usize = 25;

pub const NOT_STARTED_TEXT: &str = "Your workday has not started yet. ☀️";
pub const FINISHED_TEXT: &str = "Your workday is over. Time to go home! 🎉";
pub const WAITING_TEXT: &str = "Waiting for valid input";

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Full status block printed by `calc`.
    pub fn report(&self, input: &ScheduleInput, eval: &Evaluation, now: NaiveDateTime) -> String {
        let sep = separator('-', SEPARATOR_WIDTH);
        let mut lines = vec![
            label_line("Arrival Time", raw_or_placeholder(&input.arrival)),
            label_line(
                "Work Duration",
                &format!("{} hours", raw_or_placeholder(&input.work_duration)),
            ),
            label_line(
                "Lunch Break",
                &format!("{} minutes", raw_or_placeholder(&input.lunch_break)),
            ),
            sep.clone(),
        ];

        match eval {
            Evaluation::Waiting(e) => {
                lines.push(label_line("Calculated Departure", "--:--"));
                lines.push(sep);
                lines.push(paint(&format!("{WAITING_TEXT}: {e}"), GREY, self.color));
            }
            Evaluation::Ready { schedule, status } => {
                lines.push(label_line("Calculated Departure", &format_hm(schedule.departure)));
                lines.push(sep);
                lines.extend(self.status_lines(status, now));
            }
        }

        lines.join("\n")
    }

    fn status_lines(&self, status: &Status, now: NaiveDateTime) -> Vec<String> {
        let color = color_for_status(status);
        match status {
            Status::NotStarted => vec![paint(NOT_STARTED_TEXT, color, self.color)],
            Status::Finished => vec![paint(FINISHED_TEXT, color, self.color)],
            Status::InProgress { remaining } => vec![
                label_line("Current Time", &format_hm(now)),
                label_line(
                    "Time Remaining",
                    &paint(&format!("{} ⏳", format_remaining(*remaining)), color, self.color),
                ),
            ],
        }
    }

    /// Single line redrawn by `watch` on every tick.
    pub fn countdown(&self, eval: &Evaluation, now: NaiveDateTime) -> String {
        let clock = now.format("%H:%M:%S");
        match eval {
            Evaluation::Waiting(e) => {
                paint(&format!("[{clock}] {WAITING_TEXT}: {e}"), GREY, self.color)
            }
            Evaluation::Ready { schedule, status } => {
                let color = color_for_status(status);
                let body = match status {
                    Status::NotStarted => format!(
                        "{} (starts at {})",
                        NOT_STARTED_TEXT,
                        format_hm(schedule.arrival)
                    ),
                    Status::Finished => FINISHED_TEXT.to_string(),
                    Status::InProgress { remaining } => format!(
                        "Departure {} | Remaining {}",
                        format_hm(schedule.departure),
                        format_countdown(*remaining)
                    ),
                };
                format!("[{clock}] {}", paint(&body, color, self.color))
            }
        }
    }
}

/// Machine-readable form of an evaluation (`calc --json`).
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub now: String,
    pub arrival: String,
    pub work_duration: String,
    pub lunch_break: String,
    pub departure: Option<String>,
    pub status: String,
    pub remaining_seconds: Option<i64>,
    pub error: Option<String>,
}

impl StatusReport {
    pub fn new(input: &ScheduleInput, eval: &Evaluation, now: NaiveDateTime) -> Self {
        let (departure, status, remaining_seconds, error) = match eval {
            Evaluation::Ready { schedule, status } => (
                Some(schedule.departure.format("%Y-%m-%dT%H:%M:%S").to_string()),
                status.as_str().to_string(),
                status.remaining().map(|r| r.num_seconds()),
                None,
            ),
            Evaluation::Waiting(e) => (None, "waiting".to_string(), None, Some(e.to_string())),
        };

        Self {
            now: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            arrival: input.arrival.clone(),
            work_duration: input.work_duration.clone(),
            lunch_break: input.lunch_break.clone(),
            departure,
            status,
            remaining_seconds,
            error,
        }
    }
}
