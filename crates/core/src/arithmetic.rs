//! Business-calendar duration arithmetic
//!
//! The core of the SLA engine: adding a business duration to an instant
//! while honoring the weekly work schedule. The walk operates on wall-clock
//! time in the calendar's zone, so a 09:00-17:00 window is always eight
//! wall-clock hours regardless of UTC offset changes; only the terminal
//! local time is resolved back through the zone.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use deskflow_domain::{BusinessCalendar, BusinessDuration, DaySchedule, Result, SlaError};
use tracing::{debug, trace};

/// Add `duration` business seconds to `start`, honoring `calendar`.
///
/// Walks day by day in the calendar's zone: inactive days are skipped
/// without consuming the duration, a cursor before the day's window snaps
/// to `start`, a cursor at or past `end` rolls to the next day, and the
/// remainder is consumed inside the first window that can hold it. Landing
/// exactly on `window.end` (remainder equal to the day's remaining
/// capacity) is a valid terminal instant.
///
/// A zero duration returns `start` unchanged, never moving past a window
/// boundary. Durations beyond one week's capacity wrap across as many weeks
/// as needed; there is no week-boundary special case. A calendar with no
/// active day at all fails with [`SlaError::NoActiveWindow`] - every
/// normalized active window has positive capacity, so the walk is bounded
/// whenever one exists.
pub fn add_duration(
    start: DateTime<Utc>,
    duration: BusinessDuration,
    calendar: &BusinessCalendar,
) -> Result<DateTime<Utc>> {
    if duration.is_zero() {
        return Ok(start);
    }
    if !calendar.has_active_day() {
        return Err(SlaError::NoActiveWindow);
    }

    let timezone = calendar.timezone();
    let mut cursor = start.with_timezone(&timezone).naive_local();
    let mut remaining = i64::try_from(duration.as_secs())
        .map_err(|_| SlaError::InvalidDuration(duration.as_secs().to_string()))?;

    loop {
        let window = calendar.window_for(cursor.weekday());
        let DaySchedule::Active { start: opens, end: closes } = window else {
            trace!(day = %cursor.date(), "skipping inactive day");
            cursor = next_midnight(cursor)?;
            continue;
        };

        let opens = i64::from(opens.seconds_from_midnight());
        let closes = i64::from(closes.seconds_from_midnight());
        let mut time_of_day = i64::from(cursor.time().num_seconds_from_midnight());

        if time_of_day < opens {
            trace!(day = %cursor.date(), "snapping cursor to window start");
            cursor = at_second_of_day(cursor, opens)?;
            time_of_day = opens;
        }
        if time_of_day >= closes {
            trace!(day = %cursor.date(), "window already closed, rolling to next day");
            cursor = next_midnight(cursor)?;
            continue;
        }

        let available = closes - time_of_day;
        if remaining <= available {
            let terminal = cursor
                .checked_add_signed(Duration::seconds(remaining))
                .ok_or_else(|| SlaError::InvalidTimestamp(cursor.to_string()))?;
            let resolved = resolve_local(timezone, terminal)?;
            debug!(%start, %resolved, "business duration consumed");
            return Ok(resolved.with_timezone(&Utc));
        }

        remaining -= available;
        cursor = next_midnight(cursor)?;
    }
}

/// Nearest-integer hour count from a fractional hour value (2.25 -> 2,
/// 2.75 -> 3).
pub fn hours_from_float(value: f64) -> i64 {
    value.round() as i64
}

/// Fractional part of a fractional hour value re-expressed as an integer
/// 0-99 via `round(fract * 100)`.
///
/// A legacy display conversion, not a true hours-to-minutes conversion;
/// existing report strings depend on its exact output, so it is preserved
/// verbatim.
pub fn minutes_from_float(value: f64) -> i64 {
    ((value - value.floor()) * 100.0).round() as i64
}

fn next_midnight(cursor: NaiveDateTime) -> Result<NaiveDateTime> {
    cursor
        .date()
        .succ_opt()
        .map(|day| day.and_time(NaiveTime::MIN))
        .ok_or_else(|| SlaError::InvalidTimestamp(cursor.to_string()))
}

fn at_second_of_day(cursor: NaiveDateTime, second: i64) -> Result<NaiveDateTime> {
    u32::try_from(second)
        .ok()
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        .map(|time| cursor.date().and_time(time))
        .ok_or_else(|| SlaError::InvalidTimestamp(cursor.to_string()))
}

/// Resolve a local wall-clock datetime to an instant in `timezone`.
///
/// Ambiguous times (fall-back overlap) take the earliest instant;
/// nonexistent times (spring-forward gap) shift forward to the next valid
/// wall-clock hour. Both choices keep the arithmetic deterministic and
/// monotone.
fn resolve_local(timezone: Tz, local: NaiveDateTime) -> Result<DateTime<Tz>> {
    match timezone.from_local_datetime(&local) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let mut probe = local;
            for _ in 0..3 {
                probe = probe
                    .checked_add_signed(Duration::hours(1))
                    .ok_or_else(|| SlaError::InvalidTimestamp(local.to_string()))?;
                if let Some(instant) = timezone.from_local_datetime(&probe).earliest() {
                    return Ok(instant);
                }
            }
            Err(SlaError::InvalidTimestamp(local.to_string()))
        }
    }
}
