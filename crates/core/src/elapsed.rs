//! Simplified elapsed business-hours reporting
//!
//! Counts whole hours of overlap between an instant range and one flat
//! daily window applied uniformly to every calendar day in range. This
//! deliberately ignores day-of-week activation and time zones: it serves
//! simplified elapsed-time reporting, not due-date arithmetic.

use chrono::{DateTime, NaiveDateTime, Utc};
use deskflow_domain::constants::SECS_PER_HOUR;
use deskflow_domain::DailyWindow;

/// Whole business hours elapsed between `from` and `to` under `window`.
///
/// Returns 0 when `to <= from` (never negative) or when the window is
/// empty. The window is applied to every calendar day the range touches,
/// whole overlapping seconds are accumulated, and the total is truncated
/// to whole hours.
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>, window: DailyWindow) -> i64 {
    if to <= from {
        return 0;
    }

    let opens = window.start.as_naive_time();
    let closes = window.end.as_naive_time();
    if closes <= opens {
        return 0;
    }

    let from = from.naive_utc();
    let to = to.naive_utc();

    let mut total_secs = 0_i64;
    let mut day = from.date();
    while day <= to.date() {
        let window_start = day.and_time(opens);
        let window_end = day.and_time(closes);

        let overlap_start = NaiveDateTime::max(window_start, from);
        let overlap_end = NaiveDateTime::min(window_end, to);
        if overlap_end > overlap_start {
            total_secs += (overlap_end - overlap_start).num_seconds();
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    total_secs / SECS_PER_HOUR as i64
}

/// Whole business hours elapsed between `start` and now.
pub fn hours_since(start: DateTime<Utc>, window: DailyWindow) -> i64 {
    hours_between(start, Utc::now(), window)
}
