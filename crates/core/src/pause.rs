//! SLA clock pause/resume handling
//!
//! While a ticket sits in a non-counting state ("waiting on customer") its
//! SLA clock is frozen. Resuming shifts the due date forward by the plain
//! wall-clock pause interval - deliberately not business time, because the
//! ticket was explicitly taken out of SLA tracking for that interval. A
//! ticket paused over a weekend therefore shifts by the full real elapsed
//! time.

use chrono::{DateTime, Utc};
use deskflow_domain::{Result, SlaError, TicketClock};
use tracing::debug;

/// Result of resuming a paused clock.
///
/// Carries both the previous and the shifted due instant so operational
/// tooling can report "was due X, now due Y".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeOutcome {
    pub clock: TicketClock,
    pub previous_due: DateTime<Utc>,
    pub new_due: DateTime<Utc>,
}

impl ResumeOutcome {
    /// Human-readable "was due / now due" line for operational reporting.
    pub fn summary(&self) -> String {
        format!(
            "was due {}, now due {}",
            self.previous_due.format("%Y-%m-%d %H:%M:%S UTC"),
            self.new_due.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

/// Freeze the SLA clock at `now`.
///
/// Fails with [`SlaError::AlreadyPaused`] if the clock is already frozen.
pub fn pause(clock: TicketClock, now: DateTime<Utc>) -> Result<TicketClock> {
    if clock.is_paused() {
        return Err(SlaError::AlreadyPaused);
    }

    debug!(ticket_id = %clock.ticket_id, paused_at = %now, "SLA clock paused");
    Ok(TicketClock { paused_at: Some(now), ..clock })
}

/// Unfreeze the SLA clock at `now`, shifting the due date by the elapsed
/// pause interval.
///
/// Fails with [`SlaError::NotPaused`] if the clock is not frozen. Pausing
/// and resuming at the same instant leaves the due date untouched.
pub fn resume(clock: TicketClock, now: DateTime<Utc>) -> Result<ResumeOutcome> {
    let paused_at = clock.paused_at.ok_or(SlaError::NotPaused)?;

    let elapsed = now - paused_at;
    let new_due = clock.due_at + elapsed;

    debug!(
        ticket_id = %clock.ticket_id,
        pause_secs = elapsed.num_seconds(),
        previous_due = %clock.due_at,
        %new_due,
        "SLA clock resumed"
    );

    Ok(ResumeOutcome {
        clock: TicketClock { due_at: new_due, paused_at: None, ..clock },
        previous_due: clock.due_at,
        new_due,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    use super::*;

    fn clock() -> TicketClock {
        let started_at = Utc.with_ymd_and_hms(2023, 1, 2, 10, 0, 0).unwrap();
        let due_at = Utc.with_ymd_and_hms(2023, 1, 4, 10, 0, 0).unwrap();
        TicketClock::new(Uuid::new_v4(), started_at, due_at)
    }

    #[test]
    fn pause_stamps_the_clock() {
        let now = Utc.with_ymd_and_hms(2023, 1, 3, 8, 0, 0).unwrap();
        let paused = pause(clock(), now).unwrap();
        assert_eq!(paused.paused_at, Some(now));
        assert!(paused.is_paused());
    }

    #[test]
    fn double_pause_is_rejected() {
        let now = Utc.with_ymd_and_hms(2023, 1, 3, 8, 0, 0).unwrap();
        let paused = pause(clock(), now).unwrap();
        assert_eq!(pause(paused, now + Duration::hours(1)), Err(SlaError::AlreadyPaused));
    }

    #[test]
    fn resume_without_pause_is_rejected() {
        let now = Utc.with_ymd_and_hms(2023, 1, 3, 8, 0, 0).unwrap();
        assert_eq!(resume(clock(), now), Err(SlaError::NotPaused));
    }

    #[test]
    fn resume_shifts_due_by_wall_clock_interval() {
        let original = clock();
        let paused_at = Utc.with_ymd_and_hms(2023, 1, 3, 8, 0, 0).unwrap();
        // Paused over a weekend-sized interval: the full 48h shift applies
        let resumed_at = paused_at + Duration::hours(48);

        let outcome = resume(pause(original, paused_at).unwrap(), resumed_at).unwrap();
        assert_eq!(outcome.previous_due, original.due_at);
        assert_eq!(outcome.new_due, original.due_at + Duration::hours(48));
        assert_eq!(outcome.clock.due_at, outcome.new_due);
        assert!(!outcome.clock.is_paused());
    }

    #[test]
    fn same_instant_resume_is_a_noop_on_due() {
        let original = clock();
        let at = Utc.with_ymd_and_hms(2023, 1, 3, 8, 0, 0).unwrap();

        let outcome = resume(pause(original, at).unwrap(), at).unwrap();
        assert_eq!(outcome.clock.due_at, original.due_at);
        assert_eq!(outcome.new_due, outcome.previous_due);
    }

    #[test]
    fn summary_reports_both_due_instants() {
        let original = clock();
        let paused_at = Utc.with_ymd_and_hms(2023, 1, 3, 8, 0, 0).unwrap();
        let outcome =
            resume(pause(original, paused_at).unwrap(), paused_at + Duration::hours(2)).unwrap();

        assert_eq!(
            outcome.summary(),
            "was due 2023-01-04 10:00:00 UTC, now due 2023-01-04 12:00:00 UTC"
        );
    }
}
