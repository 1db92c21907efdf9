//! Calendar-window navigation.
//!
//! A screen's visible window is anchored by a reference date. Paging moves
//! the anchor by one window in either direction; the step size depends on the
//! selected [`TimeInterval`]:
//!
//! - `Days`: one week, re-anchored to that week's Monday
//! - `Hours`: one day
//! - `Weeks`: one month, re-anchored to Monday of the landing week
//! - `Months`: one year
//!
//! Month arithmetic follows chrono's clamping rule: stepping from Jan 31 by
//! one month lands on the last valid day of February.

use crate::interval::{StepDirection, TimeInterval};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Monday of the ISO week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date - Days::new(offset)
}

/// Normalize a reference date per the interval's anchoring rule.
///
/// `Days`/`Weeks` anchor to Monday of the week, `Months` to day 1 of the
/// month, `Hours` to the exact day. Idempotent for every interval.
pub fn normalize(date: NaiveDate, interval: TimeInterval) -> NaiveDate {
    match interval {
        TimeInterval::Hours => date,
        TimeInterval::Days | TimeInterval::Weeks => start_of_week(date),
        TimeInterval::Months => date.with_day(1).unwrap_or(date),
    }
}

/// Move the reference date one window back or forward.
pub fn step(date: NaiveDate, interval: TimeInterval, direction: StepDirection) -> NaiveDate {
    let stepped = match (interval, direction) {
        (TimeInterval::Hours, StepDirection::Back) => date - Days::new(1),
        (TimeInterval::Hours, StepDirection::Forward) => date + Days::new(1),
        (TimeInterval::Days, StepDirection::Back) => date - Days::new(7),
        (TimeInterval::Days, StepDirection::Forward) => date + Days::new(7),
        (TimeInterval::Weeks, StepDirection::Back) => {
            date.checked_sub_months(Months::new(1)).unwrap_or(date)
        }
        (TimeInterval::Weeks, StepDirection::Forward) => {
            date.checked_add_months(Months::new(1)).unwrap_or(date)
        }
        (TimeInterval::Months, StepDirection::Back) => {
            date.checked_sub_months(Months::new(12)).unwrap_or(date)
        }
        (TimeInterval::Months, StepDirection::Forward) => {
            date.checked_add_months(Months::new(12)).unwrap_or(date)
        }
    };
    normalize(stepped, interval)
}

/// Reference date to use when the user switches to `interval`.
///
/// Discards the previous anchor and recomputes from `today`, so switching
/// from day paging to week paging lands on the Monday of the current ISO
/// week rather than wherever the user had paged to.
pub fn initial_reference_date(interval: TimeInterval, today: NaiveDate) -> NaiveDate {
    normalize(today, interval)
}
