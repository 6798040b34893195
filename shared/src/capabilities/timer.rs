//! One-shot timer capability.
//!
//! The core never sleeps. It asks the shell to fire a single `Elapsed`
//! response after `millis`, and re-arms from the resulting event when it
//! wants a recurring tick. Every request is tagged with a [`TimerId`] taken
//! from a [`TimerLease`], so a response that arrives after its lease was
//! released can be recognised and dropped.

use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerOperation {
    Start { id: TimerId, millis: u64 },
    Cancel { id: TimerId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerOutput {
    Elapsed { id: TimerId },
    Cancelled { id: TimerId },
}

impl TimerOutput {
    #[must_use]
    pub const fn id(self) -> TimerId {
        match self {
            Self::Elapsed { id } | Self::Cancelled { id } => id,
        }
    }
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

pub struct Timer<Ev> {
    context: CapabilityContext<TimerOperation, Ev>,
}

impl<Ev> Capability<Ev> for Timer<Ev> {
    type Operation = TimerOperation;
    type MappedSelf<MappedEv> = Timer<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Timer::new(self.context.map_event(f))
    }
}

impl<Ev> Timer<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<TimerOperation, Ev>) -> Self {
        Self { context }
    }

    /// Ask the shell to resolve once after `millis` and feed the result back
    /// through `make_event`.
    pub fn start<F>(&self, id: TimerId, millis: u64, make_event: F)
    where
        F: FnOnce(TimerOutput) -> Ev + Send + 'static,
    {
        self.context.spawn({
            let context = self.context.clone();
            async move {
                let output = context
                    .request_from_shell(TimerOperation::Start { id, millis })
                    .await;
                context.update_app(make_event(output));
            }
        });
    }

    /// Tell the shell the timer is no longer wanted. Nothing comes back.
    pub fn cancel(&self, id: TimerId) {
        self.context.spawn({
            let context = self.context.clone();
            async move {
                context.notify_shell(TimerOperation::Cancel { id }).await;
            }
        });
    }
}

/// Monotonic id source. Ids are never reused for the life of the model.
#[derive(Debug, Default)]
pub struct TimerIds {
    next: u64,
}

impl TimerIds {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    #[must_use]
    pub fn issue(&mut self, millis: u64) -> TimerLease {
        let id = TimerId(self.next.max(1));
        self.next = id.0 + 1;
        TimerLease { id, millis }
    }
}

/// Exclusive claim on a running shell timer.
///
/// Not `Clone`: whoever holds the lease is the only state allowed to accept
/// ticks for it, and giving it up (via [`TimerLease::release`]) is the only
/// way to obtain the id for a shell cancel.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a dropped lease leaves its shell timer running until it fires"]
pub struct TimerLease {
    id: TimerId,
    millis: u64,
}

impl TimerLease {
    #[must_use]
    pub const fn id(&self) -> TimerId {
        self.id
    }

    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.millis
    }

    #[must_use]
    pub const fn owns(&self, id: TimerId) -> bool {
        self.id.0 == id.0
    }

    /// Consume the lease, yielding the id the shell must cancel.
    pub const fn release(self) -> TimerId {
        self.id
    }
}

/// Re-arm or cancel instructions produced by screen state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start { id: TimerId, millis: u64 },
    Cancel { id: TimerId },
}

impl TimerCommand {
    #[must_use]
    pub const fn start(lease: &TimerLease) -> Self {
        Self::Start {
            id: lease.id(),
            millis: lease.millis(),
        }
    }

    #[must_use]
    pub const fn cancel(lease: TimerLease) -> Self {
        Self::Cancel { id: lease.release() }
    }
}
