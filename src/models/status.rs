use chrono::TimeDelta;

/// Where "now" falls relative to the `[arrival, departure)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    InProgress { remaining: TimeDelta },
    Finished,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress { .. } => "in_progress",
            Status::Finished => "finished",
        }
    }

    pub fn remaining(&self) -> Option<TimeDelta> {
        match self {
            Status::InProgress { remaining } => Some(*remaining),
            _ => None,
        }
    }

    /// Ordinal used to check that status only moves forward during a day.
    pub fn rank(&self) -> u8 {
        match self {
            Status::NotStarted => 0,
            Status::InProgress { .. } => 1,
            Status::Finished => 2,
        }
    }
}
