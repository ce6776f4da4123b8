//! Transient order-result message.
//!
//! A result stays visible for [`RESULT_DISPLAY`] and is then cleared.
//! Showing a new result replaces the old one at once and restarts the
//! window; the previous pending clear is cancelled.

use std::fmt;
use std::time::{Duration, Instant};

use crate::outcome::{CancelOutcome, OrderId, PlaceOutcome};
use crate::schedule::Timeout;

pub const RESULT_DISPLAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub enum OrderResult {
    Placed(OrderId),
    Cancelled,
    /// Error text reported by the backend.
    Rejected(String),
    PlaceUnreachable,
    CancelUnreachable,
}

impl OrderResult {
    pub fn from_place(outcome: &PlaceOutcome) -> Self {
        match outcome {
            PlaceOutcome::Accepted(id) => OrderResult::Placed(id.clone()),
            PlaceOutcome::Rejected(error) => OrderResult::Rejected(
                error.clone().unwrap_or_else(|| "unknown error".to_string()),
            ),
            PlaceOutcome::Refused(detail) => OrderResult::Rejected(detail.clone()),
            PlaceOutcome::Unreachable => OrderResult::PlaceUnreachable,
        }
    }

    pub fn from_cancel(outcome: &CancelOutcome) -> Self {
        match outcome {
            CancelOutcome::Cancelled => OrderResult::Cancelled,
            CancelOutcome::Refused(detail) => OrderResult::Rejected(detail.clone()),
            CancelOutcome::Unreachable => OrderResult::CancelUnreachable,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, OrderResult::Placed(_) | OrderResult::Cancelled)
    }
}

impl fmt::Display for OrderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderResult::Placed(id) => {
                write!(f, "Trade executed successfully! Order ID: {id}")
            }
            OrderResult::Cancelled => f.write_str("Order cancelled."),
            OrderResult::Rejected(text) => write!(f, "Error: {text}"),
            OrderResult::PlaceUnreachable => {
                f.write_str("Error executing trade. Please try again.")
            }
            OrderResult::CancelUnreachable => f.write_str("Error occurred. Please try again."),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResultBanner {
    current: Option<OrderResult>,
    clear: Timeout,
}

impl ResultBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, result: OrderResult, now: Instant) {
        self.current = Some(result);
        self.clear.cancel();
        self.clear.arm(now, RESULT_DISPLAY);
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.clear.cancel();
    }

    /// Returns `true` if the display window elapsed and the result was
    /// cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.clear.fire(now) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&OrderResult> {
        self.current.as_ref()
    }
}
