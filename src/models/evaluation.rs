use crate::errors::InputError;
use crate::models::schedule::WorkdaySchedule;
use crate::models::status::Status;

/// Result of evaluating the inputs against a clock sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Ready {
        schedule: WorkdaySchedule,
        status: Status,
    },
    /// No departure could be computed; show the neutral waiting state.
    Waiting(InputError),
}

impl Evaluation {
    pub fn schedule(&self) -> Option<&WorkdaySchedule> {
        match self {
            Evaluation::Ready { schedule, .. } => Some(schedule),
            Evaluation::Waiting(_) => None,
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            Evaluation::Ready { status, .. } => Some(*status),
            Evaluation::Waiting(_) => None,
        }
    }

    pub fn error(&self) -> Option<&InputError> {
        match self {
            Evaluation::Ready { .. } => None,
            Evaluation::Waiting(e) => Some(e),
        }
    }
}
