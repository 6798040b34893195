//! Emergency activation countdown.
//!
//! `Idle -> CountingDown -> Active`, with `cancel` returning to `Idle` from
//! either of the latter two. The countdown is driven by one-second ticks
//! from a [`TimerLease`]; a tick is only applied if it carries the id of the
//! lease the sequencer currently holds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capabilities::{TimerCommand, TimerId, TimerIds, TimerLease};
use crate::{COUNTDOWN_SECONDS, TICK_INTERVAL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PanicPhase {
    #[default]
    Idle,
    CountingDown,
    Active,
}

/// What the presentation layer reads on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanicState {
    pub activated: bool,
    pub remaining_seconds: u32,
    pub emergency_contacted: bool,
    pub location_shared: bool,
}

impl Default for PanicState {
    fn default() -> Self {
        Self {
            activated: false,
            remaining_seconds: COUNTDOWN_SECONDS,
            emergency_contacted: false,
            location_shared: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanicError {
    #[error("panic sequence already {0:?}")]
    AlreadyActivated(PanicPhase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not ours, or we are not counting down. Nothing changed.
    Stale,
    /// One second consumed; the tick source must be re-armed.
    Continue(TimerCommand),
    /// Countdown hit zero and notifications are committed.
    Committed,
}

#[derive(Debug, Default)]
pub struct PanicSequencer {
    phase: PanicPhase,
    state: PanicState,
    lease: Option<TimerLease>,
}

impl PanicSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> PanicPhase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> PanicState {
        self.state
    }

    #[must_use]
    pub fn live_timer(&self) -> Option<TimerId> {
        self.lease.as_ref().map(TimerLease::id)
    }

    /// Start the countdown. Returns the timer the shell must start.
    pub fn activate(&mut self, ids: &mut TimerIds) -> Result<TimerCommand, PanicError> {
        if self.phase != PanicPhase::Idle {
            return Err(PanicError::AlreadyActivated(self.phase));
        }

        let lease = ids.issue(TICK_INTERVAL_MS);
        let command = TimerCommand::start(&lease);
        self.phase = PanicPhase::CountingDown;
        self.state = PanicState {
            activated: true,
            ..PanicState::default()
        };
        self.lease = Some(lease);
        Ok(command)
    }

    pub fn tick(&mut self, id: TimerId) -> TickOutcome {
        if self.phase != PanicPhase::CountingDown {
            return TickOutcome::Stale;
        }
        let Some(lease) = self.lease.as_ref() else {
            return TickOutcome::Stale;
        };
        if !lease.owns(id) {
            return TickOutcome::Stale;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);

        if self.state.remaining_seconds > 0 {
            return TickOutcome::Continue(TimerCommand::start(lease));
        }

        // The shell's one-shot already fired, so there is nothing to cancel.
        self.lease = None;
        self.state.emergency_contacted = true;
        self.state.location_shared = true;
        self.phase = PanicPhase::Active;
        TickOutcome::Committed
    }

    /// Abort the sequence. `None` when already idle (a no-op) or when no
    /// timer was outstanding; otherwise the shell timer to cancel.
    pub fn cancel(&mut self) -> Option<TimerCommand> {
        if self.phase == PanicPhase::Idle {
            return None;
        }
        self.phase = PanicPhase::Idle;
        self.state = PanicState::default();
        self.lease.take().map(TimerCommand::cancel)
    }

    /// Screen teardown: give up any outstanding timer.
    pub fn release(&mut self) -> Option<TimerCommand> {
        self.lease.take().map(TimerCommand::cancel)
    }
}
