//! Domain constants
//!
//! Centralized location for domain-level constants used throughout the
//! engine.

// Calendar constants
pub const DAYS_PER_WEEK: usize = 7;

// Duration conversion constants
pub const SECS_PER_MINUTE: u64 = 60;
pub const SECS_PER_HOUR: u64 = 3_600;
pub const SECS_PER_DAY: u64 = 86_400;
