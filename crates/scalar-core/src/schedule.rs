//! Owned, cancellable timers.
//!
//! Each timer is a plain value owned by the component it serves, so
//! dropping or stopping the component stops the timer. The UI loop
//! advances them by passing `Instant::now()`; tests pass synthetic
//! instants.

use std::time::{Duration, Instant};

/// One-shot deadline.
#[derive(Debug, Clone, Default)]
pub struct Timeout {
    deadline: Option<Instant>,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timeout to fire `after` from `now`.
    ///
    /// Any previously pending deadline is replaced.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once, the first time `now` reaches the
    /// deadline. The timeout is disarmed afterwards.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Repeating timer with a fixed period.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    /// Create a stopped interval. A zero period is bumped to 1ms.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
        }
    }

    /// (Re)start: the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if a tick is due at `now`.
    ///
    /// Missed periods collapse into a single tick; the next one stays on
    /// the period grid set at start.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }

        let behind = now.duration_since(next).as_nanos();
        let periods = behind / self.period.as_nanos() + 1;
        let periods = u32::try_from(periods).unwrap_or(u32::MAX);
        self.next = Some(next + self.period * periods);
        true
    }
}
