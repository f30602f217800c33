//! Virtual-clock scheduler
//!
//! Holds one-shot timers and animation-frame callbacks as plain task values.
//! Nothing runs on its own: the owner advances the clock and drains whatever
//! became due, which keeps every continuation on the caller's thread and makes
//! timing fully deterministic under test.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Identifier of a pending one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Identifier of a pending animation-frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

/// Timer queue plus frame queue over a monotonic virtual clock
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    /// Ordered by deadline, ties broken by scheduling order
    timers: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<TimerId, Duration>,
    frames: Vec<(FrameId, T)>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            timers: BTreeMap::new(),
            deadlines: HashMap::new(),
            frames: Vec::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Schedules `task` to become due `delay` after the current time
    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TimerId {
        let seq = self.next_seq();
        let deadline = self.now.saturating_add(delay);
        self.timers.insert((deadline, seq), task);
        self.deadlines.insert(TimerId(seq), deadline);
        log::trace!("timer {} scheduled for {:?}", seq, deadline);
        TimerId(seq)
    }

    /// Cancels a pending timer, returning its task if it had not fired yet
    pub fn clear_timeout(&mut self, id: TimerId) -> Option<T> {
        let deadline = self.deadlines.remove(&id)?;
        log::trace!("timer {} cancelled", id.0);
        self.timers.remove(&(deadline, id.0))
    }

    /// Queues `task` for the next call to [`Scheduler::take_frame`]
    pub fn request_animation_frame(&mut self, task: T) -> FrameId {
        let id = FrameId(self.next_seq());
        self.frames.push((id, task));
        id
    }

    pub fn cancel_animation_frame(&mut self, id: FrameId) -> Option<T> {
        let pos = self.frames.iter().position(|(f, _)| *f == id)?;
        Some(self.frames.remove(pos).1)
    }

    /// Drains the frame queue in request order.
    ///
    /// Callbacks requested while the drained ones run wait for the next frame.
    pub fn take_frame(&mut self) -> Vec<T> {
        std::mem::take(&mut self.frames)
            .into_iter()
            .map(|(_, task)| task)
            .collect()
    }

    /// Pops the earliest timer due at or before `until`.
    ///
    /// The clock moves forward to that timer's deadline, so tasks scheduled
    /// while handling it are measured from the moment it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (&(deadline, seq), _) = self.timers.first_key_value()?;
        if deadline > until {
            return None;
        }
        let task = self.timers.remove(&(deadline, seq))?;
        self.deadlines.remove(&TimerId(seq));
        self.now = self.now.max(deadline);
        log::trace!("timer {} fired at {:?}", seq, self.now);
        Some(task)
    }

    /// Moves the clock forward. The clock never goes backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.first_key_value().map(|(&(deadline, _), _)| deadline)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
