//! Recurring timer collaborator.
//!
//! The slideshow owns exactly one recurring timer at a time. The scheduler
//! only starts and cancels intervals; delivering the tick back into the
//! controller is the host's job, since the scheduler cannot hold the
//! controller that owns it.

/// Opaque identifier for one started interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Starts and cancels recurring intervals.
pub trait Scheduler {
    /// Start an interval firing every `period_ms` milliseconds.
    fn start_interval(&mut self, period_ms: u32) -> TimerHandle;

    /// Cancel a running interval. Cancelling an unknown handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}
