//! Per-form submission state machine.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──finish──▶ Succeeded | Failed
//!  ▲                                          │
//!  └──── banner clears (10s) or next begin ───┘
//! ```
//!
//! Only one submission may be in flight at a time.

use std::time::Instant;

use crate::banner::{OrderResult, ResultBanner};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct Submission {
    state: SubmitState,
    banner: ResultBanner,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn result(&self) -> Option<&OrderResult> {
        self.banner.current()
    }

    /// Enter `Submitting`, dropping any result still on display.
    ///
    /// Returns `false` (and changes nothing) if already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.banner.clear();
        self.state = SubmitState::Submitting;
        true
    }

    pub fn finish(&mut self, result: OrderResult, now: Instant) {
        self.state = if result.is_error() {
            SubmitState::Failed
        } else {
            SubmitState::Succeeded
        };
        self.banner.show(result, now);
    }

    /// Advance the banner timer; returns to `Idle` when it clears.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.tick(now)
            && matches!(self.state, SubmitState::Succeeded | SubmitState::Failed)
        {
            self.state = SubmitState::Idle;
        }
    }
}
