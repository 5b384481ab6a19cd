//! # Deskflow Core
//!
//! Pure business-calendar time arithmetic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Due-date arithmetic over a weekly work schedule ([`arithmetic`])
//! - Simplified elapsed business-hours reporting ([`elapsed`])
//! - SLA target resolution and due-date computation ([`sla`])
//! - Pause/resume handling for the SLA clock ([`pause`])
//!
//! ## Architecture Principles
//! - Only depends on `deskflow-domain`
//! - No database, HTTP, or platform code
//! - Every operation is a pure function of its explicit inputs; calendars
//!   and policies arrive as immutable snapshots from the persistence layer

pub mod arithmetic;
pub mod elapsed;
pub mod pause;
pub mod sla;

// Re-export the engine surface
pub use arithmetic::{add_duration, hours_from_float, minutes_from_float};
pub use elapsed::{hours_between, hours_since};
pub use pause::{pause, resume, ResumeOutcome};
pub use sla::{compute_due_dates, resolve_target};
