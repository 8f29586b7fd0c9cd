use chrono::{Datelike, TimeDelta, Weekday};

use plandag::calendar::{
    advance, duration_from_hours, fold_day, hours_of, next_working_instant, working_hours_between,
};
use plandag_test_utils::at;

// 2026-10-19 is a Monday; 2026-10-23 a Friday.

fn hours(h: i64) -> TimeDelta {
    TimeDelta::hours(h)
}

#[test]
fn morning_start_with_end_before_noon_counts_elapsed() {
    let f = fold_day(at(2026, 10, 19, 9, 0), at(2026, 10, 19, 11, 30));
    assert_eq!(f.valid, TimeDelta::minutes(150));
    assert_eq!(f.next_boundary, at(2026, 10, 19, 11, 30));
}

#[test]
fn morning_start_with_end_in_break_stops_at_noon_and_resumes_at_two() {
    let f = fold_day(at(2026, 10, 19, 11, 0), at(2026, 10, 19, 13, 0));
    assert_eq!(f.valid, hours(1));
    assert_eq!(f.next_boundary, at(2026, 10, 19, 14, 0));
}

#[test]
fn morning_start_with_afternoon_end_skips_the_break() {
    let f = fold_day(at(2026, 10, 19, 9, 0), at(2026, 10, 19, 15, 0));
    assert_eq!(f.valid, hours(4));
    assert_eq!(f.next_boundary, at(2026, 10, 19, 15, 0));

    // Only the hours left before noon count from a late-morning start.
    let f = fold_day(at(2026, 10, 19, 10, 0), at(2026, 10, 19, 15, 0));
    assert_eq!(f.valid, hours(3));
}

#[test]
fn morning_start_with_evening_end_uses_the_whole_day() {
    let f = fold_day(at(2026, 10, 19, 9, 0), at(2026, 10, 19, 20, 0));
    assert_eq!(f.valid, hours(7));
    assert_eq!(f.next_boundary, at(2026, 10, 20, 9, 0));
}

#[test]
fn break_start_counts_from_two() {
    let f = fold_day(at(2026, 10, 19, 12, 30), at(2026, 10, 19, 15, 0));
    assert_eq!(f.valid, hours(1));
    assert_eq!(f.next_boundary, at(2026, 10, 19, 15, 0));

    let f = fold_day(at(2026, 10, 19, 13, 0), at(2026, 10, 19, 19, 0));
    assert_eq!(f.valid, hours(4));
    assert_eq!(f.next_boundary, at(2026, 10, 20, 9, 0));
}

#[test]
fn afternoon_start_ending_exactly_at_close_resumes_next_morning() {
    let f = fold_day(at(2026, 10, 19, 15, 0), at(2026, 10, 19, 18, 0));
    assert_eq!(f.valid, hours(3));
    assert_eq!(f.next_boundary, at(2026, 10, 20, 9, 0));
}

#[test]
fn afternoon_start_past_close_is_capped_at_six() {
    let f = fold_day(at(2026, 10, 23, 16, 0), at(2026, 10, 23, 20, 0));
    assert_eq!(f.valid, hours(2));
    // Next calendar day, even though it is a Saturday.
    assert_eq!(f.next_boundary, at(2026, 10, 24, 9, 0));
}

#[test]
fn end_on_a_later_date_is_treated_as_midnight() {
    let f = fold_day(at(2026, 10, 19, 14, 0), at(2026, 10, 21, 3, 0));
    assert_eq!(f.valid, hours(4));
    assert_eq!(f.next_boundary, at(2026, 10, 20, 9, 0));
}

#[test]
fn uncovered_combinations_fall_back_to_zero() {
    let evening = fold_day(at(2026, 10, 19, 19, 0), at(2026, 10, 19, 20, 0));
    assert_eq!(evening.valid, TimeDelta::zero());
    assert_eq!(evening.next_boundary, at(2026, 10, 20, 9, 0));

    let lunch_only = fold_day(at(2026, 10, 19, 12, 30), at(2026, 10, 19, 13, 30));
    assert_eq!(lunch_only.valid, TimeDelta::zero());
    assert_eq!(lunch_only.next_boundary, at(2026, 10, 20, 9, 0));

    let early = fold_day(at(2026, 10, 19, 7, 0), at(2026, 10, 19, 8, 0));
    assert_eq!(early.valid_hours(), 0.0);
}

#[test]
fn weekend_days_contribute_nothing() {
    let sat = fold_day(at(2026, 10, 24, 10, 0), at(2026, 10, 24, 11, 0));
    assert_eq!(sat.valid, TimeDelta::zero());
    assert_eq!(sat.next_boundary, at(2026, 10, 26, 9, 0));

    let sun = fold_day(at(2026, 10, 25, 10, 0), at(2026, 10, 25, 11, 0));
    assert_eq!(sun.valid, TimeDelta::zero());
    assert_eq!(sun.next_boundary, at(2026, 10, 26, 9, 0));
}

#[test]
fn advance_folds_over_lunch() {
    assert_eq!(advance(at(2026, 10, 21, 11, 0), 2.0), at(2026, 10, 21, 15, 0));
}

#[test]
fn advance_from_saturday_lands_on_monday() {
    let end = advance(at(2026, 10, 24, 10, 0), 1.0);
    assert_eq!(end.weekday(), Weekday::Mon);
    assert_eq!(end, at(2026, 10, 26, 10, 0));
}

#[test]
fn advance_rolls_friday_overflow_into_next_week() {
    // Fri 16-18 (2h), Mon 9-12 + 14-18 (7h), Tue 9-10 (1h).
    assert_eq!(advance(at(2026, 10, 23, 16, 0), 10.0), at(2026, 10, 27, 10, 0));
}

#[test]
fn advance_full_day_ends_at_close() {
    assert_eq!(advance(at(2026, 10, 19, 9, 0), 7.0), at(2026, 10, 19, 18, 0));
    assert_eq!(advance(at(2026, 10, 19, 9, 0), 10.0), at(2026, 10, 20, 12, 0));
}

#[test]
fn advance_moves_off_hours_starts_to_the_next_window() {
    assert_eq!(advance(at(2026, 10, 19, 7, 0), 1.0), at(2026, 10, 19, 10, 0));
    assert_eq!(advance(at(2026, 10, 19, 12, 30), 1.0), at(2026, 10, 19, 15, 0));
    assert_eq!(advance(at(2026, 10, 19, 20, 0), 1.0), at(2026, 10, 20, 10, 0));
}

#[test]
fn advance_handles_fractional_hours() {
    assert_eq!(advance(at(2026, 10, 19, 9, 0), 1.5), at(2026, 10, 19, 10, 30));
    assert_eq!(advance(at(2026, 10, 19, 17, 30), 0.75), at(2026, 10, 20, 9, 15));
}

#[test]
fn zero_and_malformed_durations_do_not_move() {
    let sat = at(2026, 10, 24, 10, 0);
    assert_eq!(advance(sat, 0.0), sat);
    assert_eq!(advance(sat, -3.0), sat);
    assert_eq!(advance(sat, f64::NAN), sat);
    assert_eq!(duration_from_hours(f64::INFINITY), TimeDelta::zero());
}

#[test]
fn next_working_instant_snaps_into_windows() {
    assert_eq!(next_working_instant(at(2026, 10, 19, 10, 0)), at(2026, 10, 19, 10, 0));
    assert_eq!(next_working_instant(at(2026, 10, 19, 12, 0)), at(2026, 10, 19, 14, 0));
    assert_eq!(next_working_instant(at(2026, 10, 23, 18, 0)), at(2026, 10, 26, 9, 0));
    assert_eq!(next_working_instant(at(2026, 10, 25, 23, 0)), at(2026, 10, 26, 9, 0));
}

#[test]
fn working_hours_between_skips_breaks_nights_and_weekends() {
    let from = at(2026, 10, 23, 16, 0);
    let to = at(2026, 10, 27, 10, 0);
    assert_eq!(working_hours_between(from, to), hours(10));
    assert_eq!(hours_of(working_hours_between(to, from)), 0.0);
    assert_eq!(
        working_hours_between(at(2026, 10, 19, 11, 0), at(2026, 10, 19, 15, 0)),
        hours(2)
    );
}
