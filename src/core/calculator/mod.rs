//! Departure calculator: pure functions, "now" is always passed in.

pub mod departure;
pub mod duration;
pub mod status;

pub use crate::utils::time::parse_time_of_day;
pub use departure::compute_departure;
pub use duration::{parse_lunch_minutes, parse_work_hours};
pub use status::compute_status;
