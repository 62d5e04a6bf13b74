pub mod evaluation;
pub mod schedule;
pub mod status;
pub mod time_of_day;
