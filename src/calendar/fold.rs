// src/calendar/fold.rs

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use tracing::trace;

use super::{
    DAY_END, DAY_START, LUNCH_END, LUNCH_START, duration_from_hours, is_weekend,
    next_working_instant, skip_weekend,
};

/// Result of folding one segment onto a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldedDay {
    /// Working time actually available between the segment start and its
    /// (same-day) end.
    pub valid: TimeDelta,
    /// Instant from which accounting resumes.
    pub next_boundary: NaiveDateTime,
}

impl FoldedDay {
    fn new(valid: TimeDelta, next_boundary: NaiveDateTime) -> Self {
        Self {
            valid: valid.max(TimeDelta::zero()),
            next_boundary,
        }
    }

    pub fn valid_hours(&self) -> f64 {
        super::hours_of(self.valid)
    }
}

/// Count the working time between `start` and `end` on `start`'s day.
///
/// `end` is the naive (wall-clock) end of a segment beginning at `start`.
/// If it falls on a later date it is treated as midnight of `start`'s date.
///
/// Once the day's windows are used up accounting resumes at 09:00 the next
/// calendar day (which may be a Saturday; [`advance`] skips it). A weekend
/// `start` yields zero hours and resumes on Monday. Combinations the calendar
/// has no window for (start before 09:00, start at or after 18:00, start and
/// end both inside the break) yield zero hours and resume the next day.
pub fn fold_day(start: NaiveDateTime, end: NaiveDateTime) -> FoldedDay {
    let date = start.date();
    if is_weekend(date) {
        return FoldedDay::new(TimeDelta::zero(), skip_weekend(date).and_time(DAY_START));
    }

    let open = date.and_time(DAY_START);
    let noon = date.and_time(LUNCH_START);
    let resume = date.and_time(LUNCH_END);
    let close = date.and_time(DAY_END);
    let tomorrow = (date + TimeDelta::days(1)).and_time(DAY_START);
    let end = end.min((date + TimeDelta::days(1)).and_time(NaiveTime::MIN));

    let morning = noon - start;
    let afternoon = close - resume;

    if start >= open && start < noon {
        if end <= noon {
            FoldedDay::new(end - start, end)
        } else if end < resume {
            FoldedDay::new(morning, resume)
        } else if end < close {
            FoldedDay::new(morning + (end - resume), end)
        } else {
            FoldedDay::new(morning + afternoon, tomorrow)
        }
    } else if start >= noon && start < resume {
        if end >= resume && end < close {
            FoldedDay::new(end - resume, end)
        } else if end >= close {
            FoldedDay::new(afternoon, tomorrow)
        } else {
            FoldedDay::new(TimeDelta::zero(), tomorrow)
        }
    } else if start >= resume && start < close {
        if end < close {
            FoldedDay::new(end - start, end)
        } else {
            FoldedDay::new(close - start, tomorrow)
        }
    } else {
        FoldedDay::new(TimeDelta::zero(), tomorrow)
    }
}

/// Advance `start` by `hours` working hours.
///
/// Weekends, nights and the lunch break are skipped; a segment that does not
/// fit in the current window rolls over to the next one until the duration
/// is exhausted. The result always lies on a working-window boundary or
/// inside a window, so the working time between `start` and the result
/// equals `hours` exactly.
///
/// Zero, negative and non-finite durations return `start` unchanged.
pub fn advance(start: NaiveDateTime, hours: f64) -> NaiveDateTime {
    let mut remaining = duration_from_hours(hours);
    if remaining.is_zero() {
        return start;
    }

    let mut cursor = start;
    loop {
        cursor = next_working_instant(cursor);
        let naive_end = cursor
            .checked_add_signed(remaining)
            .unwrap_or(NaiveDateTime::MAX);
        let folded = fold_day(cursor, naive_end);

        trace!(
            %cursor,
            %naive_end,
            valid_ms = folded.valid.num_milliseconds(),
            remaining_ms = remaining.num_milliseconds(),
            "folded segment"
        );

        if folded.valid >= remaining {
            return naive_end;
        }
        remaining -= folded.valid;
        cursor = folded.next_boundary;
    }
}
