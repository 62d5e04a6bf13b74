use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time, sub-second part dropped.
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

/// Today's date at the given wall-clock time.
pub fn today_at(t: NaiveTime) -> NaiveDateTime {
    today().and_time(t)
}
