//! One-shot deferred calls used by the mission controller.
use std::{fmt, time::Duration};

use bevy::prelude::*;

/// Handle returned by [`Scheduler::schedule_once`], used to cancel the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TASK-{:05}", self.0)
    }
}

/// Deferred work the controller asks to be called back with.
///
/// Each action carries the controller epoch it was scheduled under; the
/// controller discards actions whose epoch no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    NewOrder { epoch: u64 },
    DestinationHint { epoch: u64 },
}

impl ScheduledAction {
    pub fn epoch(self) -> u64 {
        match self {
            Self::NewOrder { epoch } | Self::DestinationHint { epoch } => epoch,
        }
    }
}

/// Generic deferred-call facility.
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, action: ScheduledAction) -> TaskHandle;

    /// Returns `true` when the handle was still pending.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
}

#[derive(Debug)]
struct PendingCall {
    handle: TaskHandle,
    remaining: Duration,
    action: ScheduledAction,
}

/// Queue of pending one-shot calls advanced by the simulation clock.
#[derive(Resource, Debug, Default)]
pub struct DeferredQueue {
    pending: Vec<PendingCall>,
    next_id: u64,
}

impl DeferredQueue {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advances every pending call and returns the ones now due, in scheduling order.
    pub fn advance(&mut self, delta: Duration) -> Vec<ScheduledAction> {
        let mut due = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());
        for mut call in self.pending.drain(..) {
            call.remaining = call.remaining.saturating_sub(delta);
            if call.remaining.is_zero() {
                due.push(call.action);
            } else {
                still_pending.push(call);
            }
        }
        self.pending = still_pending;
        due
    }
}

impl Scheduler for DeferredQueue {
    fn schedule_once(&mut self, delay: Duration, action: ScheduledAction) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle::new(self.next_id);
        self.pending.push(PendingCall {
            handle,
            remaining: delay,
            action,
        });
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|call| call.handle != handle);
        before != self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_calls_once_their_delay_elapses() {
        let mut queue = DeferredQueue::default();
        queue.schedule_once(
            Duration::from_millis(1_500),
            ScheduledAction::DestinationHint { epoch: 1 },
        );
        queue.schedule_once(
            Duration::from_millis(2_000),
            ScheduledAction::NewOrder { epoch: 1 },
        );

        assert!(queue.advance(Duration::from_millis(1_000)).is_empty());
        assert_eq!(
            queue.advance(Duration::from_millis(500)),
            vec![ScheduledAction::DestinationHint { epoch: 1 }]
        );
        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.advance(Duration::from_millis(600)),
            vec![ScheduledAction::NewOrder { epoch: 1 }]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn cancelled_calls_never_fire() {
        let mut queue = DeferredQueue::default();
        let handle = queue.schedule_once(
            Duration::from_millis(100),
            ScheduledAction::NewOrder { epoch: 3 },
        );

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert!(queue.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(ScheduledAction::NewOrder { epoch: 3 }.epoch(), 3);
    }
}
