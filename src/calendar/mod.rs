// src/calendar/mod.rs

//! Fixed organisational working calendar.
//!
//! - Monday to Friday only; Saturday and Sunday never contribute hours.
//! - Working window 09:00–18:00 with a break 12:00–14:00, i.e. 3 hours in
//!   the morning and 4 in the afternoon (7 per day).
//!
//! [`fold`] holds the two primitives the scheduler is built on:
//! [`fold_day`] and [`advance`]. Everything here is a pure function of its
//! arguments.

pub mod fold;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

pub use fold::{FoldedDay, advance, fold_day};

const fn clock(hour: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(t) => t,
        None => panic!("hour out of range"),
    }
}

/// Start of the morning window.
pub const DAY_START: NaiveTime = clock(9);
/// Start of the lunch break.
pub const LUNCH_START: NaiveTime = clock(12);
/// End of the lunch break.
pub const LUNCH_END: NaiveTime = clock(14);
/// End of the afternoon window.
pub const DAY_END: NaiveTime = clock(18);

/// Working hours available on a full weekday.
pub const HOURS_PER_DAY: f64 = 7.0;

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The same date on a weekday, otherwise the following Monday.
pub fn skip_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + TimeDelta::days(2),
        Weekday::Sun => date + TimeDelta::days(1),
        _ => date,
    }
}

/// 09:00 on the next business day after `date`.
pub fn next_morning(date: NaiveDate) -> NaiveDateTime {
    skip_weekend(date + TimeDelta::days(1)).and_time(DAY_START)
}

/// Earliest instant at or after `t` that lies inside a working window.
pub fn next_working_instant(t: NaiveDateTime) -> NaiveDateTime {
    let date = t.date();
    if is_weekend(date) {
        return skip_weekend(date).and_time(DAY_START);
    }

    let time = t.time();
    if time < DAY_START {
        date.and_time(DAY_START)
    } else if time >= LUNCH_START && time < LUNCH_END {
        date.and_time(LUNCH_END)
    } else if time >= DAY_END {
        next_morning(date)
    } else {
        t
    }
}

/// Working time between two instants (zero if `to <= from`).
pub fn working_hours_between(from: NaiveDateTime, to: NaiveDateTime) -> TimeDelta {
    let mut total = TimeDelta::zero();
    if to <= from {
        return total;
    }

    let mut date = from.date();
    while date <= to.date() {
        if !is_weekend(date) {
            for (open, close) in [(DAY_START, LUNCH_START), (LUNCH_END, DAY_END)] {
                let lo = from.max(date.and_time(open));
                let hi = to.min(date.and_time(close));
                if hi > lo {
                    total += hi - lo;
                }
            }
        }
        date += TimeDelta::days(1);
    }

    total
}

/// Convert an hour count to a millisecond-precision duration.
///
/// NaN, infinite and negative inputs yield zero.
pub fn duration_from_hours(hours: f64) -> TimeDelta {
    if !hours.is_finite() || hours <= 0.0 {
        return TimeDelta::zero();
    }
    TimeDelta::try_milliseconds((hours * 3_600_000.0).round() as i64).unwrap_or(TimeDelta::MAX)
}

pub fn hours_of(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 3_600_000.0
}
