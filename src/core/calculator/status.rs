use crate::models::status::Status;
use chrono::NaiveDateTime;

/// Classify `now` against the `[arrival, departure)` window.
///
/// `arrival <= departure` holds by construction. If it did not, "not
/// started" would win for `now < arrival` and "finished" for anything else.
pub fn compute_status(
    now: NaiveDateTime,
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
) -> Status {
    if now < arrival {
        Status::NotStarted
    } else if now >= departure {
        Status::Finished
    } else {
        Status::InProgress {
            remaining: departure - now,
        }
    }
}
