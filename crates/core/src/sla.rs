//! SLA target resolution and due-date computation

use chrono::{DateTime, Utc};
use deskflow_domain::{DueDates, Result, SlaError, SlaPolicy, SlaTarget, TicketPriority};
use tracing::debug;

use crate::arithmetic;

/// Look up the target configured for `priority` under `policy`.
///
/// Fails with [`SlaError::TargetNotFound`] when the level has no target.
pub fn resolve_target(policy: &SlaPolicy, priority: TicketPriority) -> Result<&SlaTarget> {
    policy.target(priority).ok_or_else(|| SlaError::TargetNotFound(priority.to_string()))
}

/// Compute the response/resolve due-date pair for a ticket created at
/// `created_at`.
///
/// Both due dates run through the business-calendar arithmetic against the
/// policy's calendar. Either the full pair is computed or the call fails
/// outright; there is no partial result.
pub fn compute_due_dates(
    policy: &SlaPolicy,
    priority: TicketPriority,
    created_at: DateTime<Utc>,
) -> Result<DueDates> {
    let target = resolve_target(policy, priority)?;

    let response_due = arithmetic::add_duration(created_at, target.response, policy.calendar())?;
    let resolve_due = arithmetic::add_duration(created_at, target.resolve, policy.calendar())?;

    debug!(
        policy = policy.name(),
        %priority,
        %created_at,
        %response_due,
        %resolve_due,
        "computed SLA due dates"
    );

    Ok(DueDates { response_due, resolve_due })
}
