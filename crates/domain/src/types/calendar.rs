//! Business calendar types
//!
//! A `BusinessCalendar` is the normalized, queryable form of the weekly
//! recurring work schedule stored by the surrounding configuration layer: an
//! IANA time zone plus one window per weekday. Raw configuration rows arrive
//! as [`CalendarRecord`] (the exact textual shape the config store persists)
//! and normalize through [`BusinessCalendar::from_record`].

use std::fmt;

use chrono::{DateTime, NaiveTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_WEEK, SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::errors::{Result, SlaError};
use crate::utils::codec;

/// A wall-clock time of day (hour 0-23, minute 0-59).
///
/// Distinct from [`BusinessDuration`]: the hour here can never exceed 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Create a clock time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(self) -> u32 {
        u32::from(self.hour) * SECS_PER_HOUR as u32 + u32::from(self.minute) * SECS_PER_MINUTE as u32
    }

    /// Convert to a `chrono::NaiveTime` (seconds component is always zero).
    pub fn as_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_clock_time(*self))
    }
}

/// A non-negative count of business seconds.
///
/// Round-trips through the `HH:MM` text form where the hour field denotes
/// accumulated hours and may exceed 24 (`"120:30"` is 120 hours 30 minutes).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BusinessDuration(u64);

impl BusinessDuration {
    pub const ZERO: Self = Self(0);

    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BusinessDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_duration(*self))
    }
}

/// The work window for a single weekday.
///
/// A tagged variant rather than nullable start/end fields: an inactive day
/// carries no window at all, so malformed half-configured days cannot be
/// represented once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DaySchedule {
    /// Working day with a same-day window, `start < end`.
    Active { start: ClockTime, end: ClockTime },
    /// Non-working day.
    Inactive,
}

impl DaySchedule {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// One flat daily window, applied uniformly to every calendar day.
///
/// Used by the elapsed-hours calculator, which deliberately ignores
/// day-of-week activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Raw per-weekday configuration row as stored by the config layer.
///
/// Inactive days commonly carry empty time strings; unparsable strings are
/// tolerated and read as "no window defined".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub active: bool,
    #[serde(default)]
    pub starts_at: String,
    #[serde(default)]
    pub ends_at: String,
}

/// Raw weekly schedule as stored by the config layer.
///
/// `days` is indexed Monday..Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub timezone: String,
    pub days: [DayRecord; DAYS_PER_WEEK],
}

/// Normalized weekly work schedule with time zone.
///
/// Immutable once built; every arithmetic call receives it as a read-only
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    timezone: Tz,
    days: [DaySchedule; DAYS_PER_WEEK],
}

impl BusinessCalendar {
    /// Build a calendar from already-normalized day schedules.
    ///
    /// `days` is indexed Monday=0 .. Sunday=6.
    pub fn new(timezone: Tz, days: [DaySchedule; DAYS_PER_WEEK]) -> Self {
        Self { timezone, days }
    }

    /// Normalize a raw configuration record into a calendar.
    ///
    /// Fails only on an unknown time zone. Day rows degrade leniently: an
    /// "active" row whose start or end is missing, unparsable, or inverted
    /// (`start >= end`) normalizes to [`DaySchedule::Inactive`], preserving
    /// the tolerance of legacy records that leave unused day fields blank.
    pub fn from_record(record: &CalendarRecord) -> Result<Self> {
        let timezone: Tz = record
            .timezone
            .parse()
            .map_err(|_| SlaError::InvalidTimezone(record.timezone.clone()))?;

        let days = std::array::from_fn(|index| Self::normalize_day(&record.days[index]));
        Ok(Self { timezone, days })
    }

    fn normalize_day(record: &DayRecord) -> DaySchedule {
        if !record.active {
            return DaySchedule::Inactive;
        }

        match (codec::parse_clock_time(&record.starts_at), codec::parse_clock_time(&record.ends_at))
        {
            (Some(start), Some(end)) if start < end => DaySchedule::Active { start, end },
            _ => DaySchedule::Inactive,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// O(1) lookup of the window configured for a weekday.
    pub fn window_for(&self, weekday: Weekday) -> DaySchedule {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// Whether at least one weekday carries an active window.
    pub fn has_active_day(&self) -> bool {
        self.days.iter().any(|day| day.is_active())
    }

    /// Whether `instant` falls inside that weekday's active window
    /// (`start <= time-of-day < end`), evaluated in the calendar's zone.
    pub fn is_within_window(&self, instant: DateTime<Utc>) -> bool {
        let local = instant.with_timezone(&self.timezone);
        match self.window_for(chrono::Datelike::weekday(&local)) {
            DaySchedule::Active { start, end } => {
                let time_of_day = local.time().num_seconds_from_midnight();
                start.seconds_from_midnight() <= time_of_day
                    && time_of_day < end.seconds_from_midnight()
            }
            DaySchedule::Inactive => false,
        }
    }
}
