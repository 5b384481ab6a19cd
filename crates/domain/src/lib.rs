//! # Deskflow Domain
//!
//! Business domain types and models for the Deskflow SLA engine.
//!
//! This crate contains:
//! - Domain data types (BusinessCalendar, SlaPolicy, TicketClock, etc.)
//! - Domain error types and Result definitions
//! - Duration and clock-time codec utilities
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Deskflow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export codec utilities
pub use utils::codec::{format_clock_time, format_duration, parse_clock_time, parse_duration};
