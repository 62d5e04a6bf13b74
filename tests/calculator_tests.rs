use chrono::{NaiveDate, TimeDelta};
use rdeparture::core::calculator::{
    compute_departure, compute_status, parse_lunch_minutes, parse_time_of_day, parse_work_hours,
};
use rdeparture::core::logic::Core;
use rdeparture::errors::{Field, InputError};
use rdeparture::models::evaluation::Evaluation;
use rdeparture::models::schedule::ScheduleInput;
use rdeparture::models::status::Status;
use rdeparture::models::time_of_day::TimeOfDay;

mod common;
use common::at;

#[test]
fn test_scenario_in_progress_at_arrival() {
    let now = at(7, 45, 0);
    let eval = Core::evaluate(now, &ScheduleInput::new("07:45", "8", "30"));

    let schedule = eval.schedule().expect("schedule");
    assert_eq!(schedule.departure, at(16, 15, 0));
    assert_eq!(
        eval.status(),
        Some(Status::InProgress {
            remaining: TimeDelta::hours(8) + TimeDelta::minutes(30)
        })
    );
}

#[test]
fn test_scenario_not_started() {
    let eval = Core::evaluate(at(8, 0, 0), &ScheduleInput::new("09:00", "8.0", "30"));
    assert_eq!(eval.status(), Some(Status::NotStarted));
}

#[test]
fn test_scenario_finished() {
    let eval = Core::evaluate(at(18, 0, 0), &ScheduleInput::new("09:00", "8.0", "30"));
    assert_eq!(eval.schedule().map(|s| s.departure), Some(at(17, 30, 0)));
    assert_eq!(eval.status(), Some(Status::Finished));
}

#[test]
fn test_scenario_empty_arrival() {
    let eval = Core::evaluate(at(8, 0, 0), &ScheduleInput::new("", "8", "30"));
    assert_eq!(eval, Evaluation::Waiting(InputError::EmptyField(Field::Arrival)));
    assert!(eval.schedule().is_none());
}

#[test]
fn test_scenario_negative_work_rejected() {
    let eval = Core::evaluate(at(8, 0, 0), &ScheduleInput::new("07:45", "-1", "30"));
    assert!(matches!(
        eval.error(),
        Some(InputError::InvalidInput {
            field: Field::WorkDuration,
            ..
        })
    ));
}

#[test]
fn test_blank_fields_reported_before_parse_errors() {
    let eval = Core::evaluate(at(8, 0, 0), &ScheduleInput::new("xx", "8", "  "));
    assert_eq!(eval.error(), Some(&InputError::EmptyField(Field::LunchBreak)));
}

#[test]
fn test_parse_format_roundtrip_all_valid_times() {
    for h in 0..24 {
        for m in 0..60 {
            let s = format!("{h:02}:{m:02}");
            let t = parse_time_of_day(&s).expect("valid time");
            assert_eq!(t.to_string(), s);
        }
    }
}

#[test]
fn test_parse_rejects_malformed_times() {
    for bad in ["25:00", "24:00", "12:60", "9:5", "9:05", "09:5", "abc", "09:00:00", "9am", "-1:00", "09-00"] {
        assert_eq!(
            parse_time_of_day(bad),
            Err(InputError::InvalidFormat(bad.to_string())),
            "{bad} should be rejected"
        );
    }
    assert_eq!(parse_time_of_day(""), Err(InputError::EmptyField(Field::Arrival)));
    assert_eq!(parse_time_of_day("   "), Err(InputError::EmptyField(Field::Arrival)));
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse_time_of_day(" 07:45 "), Ok(TimeOfDay::new(7, 45).expect("valid")));
}

#[test]
fn test_parse_durations() {
    assert_eq!(parse_work_hours("7.5"), Ok(7.5));
    assert_eq!(parse_work_hours("8"), Ok(8.0));
    assert_eq!(parse_lunch_minutes("30"), Ok(30));
    assert_eq!(parse_lunch_minutes("0"), Ok(0));

    assert!(matches!(parse_work_hours("eight"), Err(InputError::InvalidInput { .. })));
    assert!(matches!(parse_work_hours("NaN"), Err(InputError::InvalidInput { .. })));
    assert!(matches!(parse_work_hours("inf"), Err(InputError::InvalidInput { .. })));
    assert!(matches!(parse_lunch_minutes("30.5"), Err(InputError::InvalidInput { .. })));
    assert!(matches!(parse_lunch_minutes("-5"), Err(InputError::InvalidInput { .. })));
    assert_eq!(parse_lunch_minutes(""), Err(InputError::EmptyField(Field::LunchBreak)));
    assert_eq!(parse_work_hours(" "), Err(InputError::EmptyField(Field::WorkDuration)));
}

#[test]
fn test_fractional_work_hours() {
    let arrival = TimeOfDay::new(8, 0).expect("valid");
    let departure = compute_departure(at(12, 0, 0), arrival, 7.5, 45).expect("departure");
    assert_eq!(departure, at(16, 15, 0));
}

#[test]
fn test_arrival_anchored_to_date_of_now_with_seconds_zeroed() {
    let eval = Core::evaluate(at(10, 17, 42), &ScheduleInput::new("09:00", "1", "0"));
    let schedule = eval.schedule().expect("schedule");
    assert_eq!(schedule.arrival, at(9, 0, 0));
    assert_eq!(schedule.departure, at(10, 0, 0));
}

#[test]
fn test_departure_may_cross_midnight() {
    let arrival = TimeOfDay::new(20, 0).expect("valid");
    let departure = compute_departure(at(20, 30, 0), arrival, 8.0, 30).expect("departure");
    let next_day = NaiveDate::from_ymd_opt(2025, 3, 15)
        .expect("valid date")
        .and_hms_opt(4, 30, 0)
        .expect("valid time");
    assert_eq!(departure, next_day);

    let eval = Core::evaluate(at(23, 0, 0), &ScheduleInput::new("20:00", "8", "30"));
    let schedule = eval.schedule().expect("schedule");
    assert_eq!(schedule.departure.date(), next_day.date());
    assert_ne!(schedule.departure.date(), schedule.arrival.date());
    assert!(matches!(eval.status(), Some(Status::InProgress { .. })));
}

#[test]
fn test_negative_values_rejected_by_compute_departure() {
    let arrival = TimeOfDay::new(9, 0).expect("valid");
    assert!(compute_departure(at(9, 0, 0), arrival, -0.5, 30).is_err());
    assert!(compute_departure(at(9, 0, 0), arrival, 8.0, -1).is_err());
    assert!(compute_departure(at(9, 0, 0), arrival, f64::INFINITY, 0).is_err());
    assert!(compute_departure(at(9, 0, 0), arrival, 1e300, 0).is_err());
}

#[test]
fn test_overflow_blames_the_field_that_overflowed() {
    let arrival = TimeOfDay::new(9, 0).expect("valid");

    let err = compute_departure(at(9, 0, 0), arrival, 8.0, 100_000_000_000_000)
        .expect_err("lunch overflow");
    assert!(matches!(
        err,
        InputError::InvalidInput { field: Field::LunchBreak, ref value, .. } if value == "100000000000000"
    ));

    let err = compute_departure(at(9, 0, 0), arrival, 2.0e12, 30).expect_err("work overflow");
    assert!(matches!(
        err,
        InputError::InvalidInput {
            field: Field::WorkDuration,
            ..
        }
    ));
}

#[test]
fn test_lunch_before_or_after_work_gives_same_departure() {
    let arrival = at(7, 45, 0);
    let work = TimeDelta::hours(8);
    let lunch = TimeDelta::minutes(30);
    assert_eq!(arrival + work + lunch, arrival + lunch + work);

    let computed =
        compute_departure(at(7, 0, 0), TimeOfDay::new(7, 45).expect("valid"), 8.0, 30)
            .expect("departure");
    assert_eq!(computed, arrival + lunch + work);
}

#[test]
fn test_status_is_monotonic_over_the_day() {
    let arrival = at(9, 0, 0);
    let departure = at(17, 30, 0);

    let mut last_rank = 0;
    let mut now = at(0, 0, 0);
    while now <= at(23, 59, 0) {
        let rank = compute_status(now, arrival, departure).rank();
        assert!(rank >= last_rank, "status regressed at {now}");
        last_rank = rank;
        now += TimeDelta::minutes(7);
    }
    assert_eq!(last_rank, 2);
}

#[test]
fn test_status_boundaries() {
    let arrival = at(9, 0, 0);
    let departure = at(17, 0, 0);

    assert_eq!(compute_status(at(8, 59, 59), arrival, departure), Status::NotStarted);
    assert_eq!(
        compute_status(arrival, arrival, departure),
        Status::InProgress {
            remaining: TimeDelta::hours(8)
        }
    );
    assert_eq!(
        compute_status(at(16, 59, 59), arrival, departure),
        Status::InProgress {
            remaining: TimeDelta::seconds(1)
        }
    );
    assert_eq!(compute_status(departure, arrival, departure), Status::Finished);
}

#[test]
fn test_zero_length_day_is_finished_at_arrival() {
    let eval = Core::evaluate(at(9, 0, 0), &ScheduleInput::new("09:00", "0", "0"));
    assert_eq!(eval.status(), Some(Status::Finished));
}

#[test]
fn test_recomputation_is_idempotent() {
    let input = ScheduleInput::new("07:45", "7.75", "45");
    let first = Core::evaluate(at(11, 11, 11), &input);
    for _ in 0..10 {
        assert_eq!(Core::evaluate(at(11, 11, 11), &input), first);
    }
}
