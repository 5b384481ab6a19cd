//! Domain types and models

pub mod calendar;
pub mod sla;

pub use calendar::{
    BusinessCalendar, BusinessDuration, CalendarRecord, ClockTime, DailyWindow, DayRecord,
    DaySchedule,
};
pub use sla::{
    DueDates, SlaPolicy, SlaPolicyRecord, SlaTarget, SlaTargetRecord, TicketClock, TicketPriority,
};
