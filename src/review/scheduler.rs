//! Reveal timer scheduling
//!
//! The review session only needs to schedule and cancel deferred actions.
//! The host decides when time passes: the terminal UI polls a
//! [`DeadlineScheduler`] from its event loop, tests step a [`ManualScheduler`].

use std::time::{Duration, Instant};

/// Opaque handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Capability to schedule and cancel deferred actions
pub trait Scheduler {
    /// Schedule a timer firing after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Wall-clock scheduler polled by an event loop
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    timers: Vec<(TimerHandle, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers still waiting to fire
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest deadline among pending timers
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|(_, at)| *at).min()
    }

    /// Remove and return the earliest timer whose deadline is at or before `now`
    pub fn take_expired(&mut self, now: Instant) -> Option<TimerHandle> {
        let pos = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (_, at))| *at <= now)
            .min_by_key(|(_, (_, at))| *at)
            .map(|(pos, _)| pos)?;
        Some(self.timers.remove(pos).0)
    }

    fn schedule_at(&mut self, deadline: Instant) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push((handle, deadline));
        handle
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.schedule_at(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }
}

/// Scheduler where time only moves when told to
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    timers: Vec<(TimerHandle, Duration)>,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Total number of cancellations that removed a pending timer
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Delay of the most recently scheduled pending timer
    pub fn last_delay(&self) -> Option<Duration> {
        self.timers.last().map(|(_, delay)| *delay)
    }

    /// Fire the oldest pending timer, returning its handle
    pub fn fire_next(&mut self) -> Option<TimerHandle> {
        if self.timers.is_empty() {
            return None;
        }
        Some(self.timers.remove(0).0)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push((handle, delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let before = self.timers.len();
        self.timers.retain(|(h, _)| *h != handle);
        self.cancelled += before - self.timers.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_fires_only_after_delay() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let handle = scheduler.schedule_at(start + Duration::from_secs(3));

        assert_eq!(scheduler.take_expired(start), None);
        assert_eq!(scheduler.take_expired(start + Duration::from_secs(2)), None);
        assert_eq!(scheduler.take_expired(start + Duration::from_secs(3)), Some(handle));
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.take_expired(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_deadline_fires_earliest_first() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let late = scheduler.schedule_at(start + Duration::from_secs(5));
        let early = scheduler.schedule_at(start + Duration::from_secs(1));

        assert_eq!(scheduler.next_deadline(), Some(start + Duration::from_secs(1)));

        let later = start + Duration::from_secs(6);
        assert_eq!(scheduler.take_expired(later), Some(early));
        assert_eq!(scheduler.take_expired(later), Some(late));
    }

    #[test]
    fn test_cancel_is_unconditional() {
        let mut scheduler = DeadlineScheduler::new();
        let handle = scheduler.schedule(Duration::from_secs(3));

        scheduler.cancel(handle);
        scheduler.cancel(handle);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn test_manual_scheduler() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.schedule(Duration::from_secs(3));
        let second = scheduler.schedule(Duration::from_secs(5));
        assert_ne!(first, second);
        assert_eq!(scheduler.last_delay(), Some(Duration::from_secs(5)));

        scheduler.cancel(first);
        scheduler.cancel(first);
        assert_eq!(scheduler.cancelled(), 1);

        assert_eq!(scheduler.fire_next(), Some(second));
        assert_eq!(scheduler.fire_next(), None);
    }
}
