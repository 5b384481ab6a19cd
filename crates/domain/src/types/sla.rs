//! SLA policy and ticket-clock types

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::types::calendar::{BusinessCalendar, BusinessDuration, CalendarRecord};
use crate::utils::codec;

/// Ticket priority level.
///
/// Maps to SLA target lookup only; severity wording and presentation belong
/// to the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Critical,
    Urgent,
    High,
    Medium,
    Low,
}

impl TicketPriority {
    pub const ALL: [Self; 5] = [Self::Critical, Self::Urgent, Self::High, Self::Medium, Self::Low];

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response/resolve duration budget for one priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaTarget {
    pub priority: TicketPriority,
    pub response: BusinessDuration,
    pub resolve: BusinessDuration,
}

/// Raw SLA target row as stored by the config layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaTargetRecord {
    pub priority: TicketPriority,
    pub response_time: String,
    pub resolve_time: String,
}

/// Raw SLA policy row as stored by the config layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaPolicyRecord {
    pub name: String,
    pub calendar: CalendarRecord,
    pub targets: Vec<SlaTargetRecord>,
}

/// An SLA policy: a named calendar plus at most one target per priority.
#[derive(Debug, Clone, PartialEq)]
pub struct SlaPolicy {
    name: String,
    calendar: BusinessCalendar,
    targets: HashMap<TicketPriority, SlaTarget>,
}

impl SlaPolicy {
    pub fn new(name: impl Into<String>, calendar: BusinessCalendar) -> Self {
        Self { name: name.into(), calendar, targets: HashMap::new() }
    }

    /// Normalize a raw configuration record into a policy.
    ///
    /// Target durations parse strictly; a malformed `HH:MM` duration fails
    /// the whole record. Duplicate priorities keep the last row, matching
    /// the overwrite semantics of [`SlaPolicy::set_target`].
    pub fn from_record(record: &SlaPolicyRecord) -> Result<Self> {
        let calendar = BusinessCalendar::from_record(&record.calendar)?;
        let mut policy = Self::new(record.name.clone(), calendar);

        for target in &record.targets {
            policy.set_target(SlaTarget {
                priority: target.priority,
                response: codec::parse_duration(&target.response_time)?,
                resolve: codec::parse_duration(&target.resolve_time)?,
            });
        }

        Ok(policy)
    }

    /// Set the target for a priority level, overwriting any existing one.
    pub fn set_target(&mut self, target: SlaTarget) {
        self.targets.insert(target.priority, target);
    }

    pub fn target(&self, priority: TicketPriority) -> Option<&SlaTarget> {
        self.targets.get(&priority)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }
}

/// Computed due-date pair for one ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDates {
    pub response_due: DateTime<Utc>,
    pub resolve_due: DateTime<Utc>,
}

/// Per-ticket SLA clock state.
///
/// While `paused_at` is set the clock is frozen; resuming shifts `due_at`
/// forward by the plain wall-clock pause interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketClock {
    pub ticket_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub paused_at: Option<DateTime<Utc>>,
}

impl TicketClock {
    pub fn new(ticket_id: Uuid, started_at: DateTime<Utc>, due_at: DateTime<Utc>) -> Self {
        Self { ticket_id, started_at, due_at, paused_at: None }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }
}
