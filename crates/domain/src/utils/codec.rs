//! Duration and clock-time text codec
//!
//! The configuration store persists business durations and daily window
//! bounds as `HH:MM` strings. Durations parse strictly (a malformed SLA
//! target is a configuration error), while per-day clock times parse
//! leniently (inactive days commonly carry empty strings, so an unparsable
//! value reads as "unset" rather than failing the whole calendar).

use crate::constants::{SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::errors::{Result, SlaError};
use crate::types::calendar::{BusinessDuration, ClockTime};

/// Parse a strict `HH:MM` business-duration string.
///
/// The hour field is two or more digits and may exceed 24 (it denotes
/// accumulated hours, not hour-of-day); minutes are exactly two digits,
/// 00-59. Anything else fails with [`SlaError::InvalidDuration`].
///
/// # Examples
///
/// ```
/// use deskflow_domain::parse_duration;
///
/// assert_eq!(parse_duration("08:00").unwrap().as_secs(), 28_800);
/// assert_eq!(parse_duration("120:30").unwrap().as_secs(), 433_800);
/// assert!(parse_duration("8:00").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<BusinessDuration> {
    let invalid = || SlaError::InvalidDuration(text.to_string());

    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    if hours.len() < 2 || !hours.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }
    if minutes.len() != 2 || !minutes.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    if minutes > 59 {
        return Err(invalid());
    }

    // The grammar puts no upper bound on the hour field; an accumulated
    // hour count too large to hold in seconds is still a malformed duration
    let seconds = hours
        .checked_mul(SECS_PER_HOUR)
        .and_then(|secs| secs.checked_add(minutes * SECS_PER_MINUTE))
        .ok_or_else(invalid)?;

    Ok(BusinessDuration::from_secs(seconds))
}

/// Format a business duration back to its `HH:MM` text form.
///
/// Inverse of [`parse_duration`] up to zero-padding normalization; seconds
/// below one full minute are truncated.
pub fn format_duration(duration: BusinessDuration) -> String {
    let hours = duration.as_secs() / SECS_PER_HOUR;
    let minutes = (duration.as_secs() % SECS_PER_HOUR) / SECS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}")
}

/// Leniently parse an `H:MM` or `HH:MM` wall-clock time of day.
///
/// Hour 0-23, minute 00-59. Any other shape (including the empty string)
/// returns `None` - the calendar treats unparsable day strings as "no window
/// defined" rather than a hard failure.
pub fn parse_clock_time(text: &str) -> Option<ClockTime> {
    let (hour, minute) = text.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if minute.len() != 2 || !minute.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    ClockTime::new(hour.parse().ok()?, minute.parse().ok()?)
}

/// Format a clock time as zero-padded `HH:MM`.
pub fn format_clock_time(time: ClockTime) -> String {
    format!("{:02}:{:02}", time.hour, time.minute)
}
