//! Variant B: scalar target trade.
//!
//! Every field is edited directly; nothing is derived. Defaults come
//! from the current mark price and are restored after each accepted
//! order.

use std::time::Instant;

use crate::banner::OrderResult;
use crate::direction::Direction;
use crate::error::FormError;
use crate::leverage::Leverage;
use crate::market::MarketSnapshot;
use crate::outcome::PlaceOutcome;
use crate::submission::{SubmitState, Submission};

pub const DEFAULT_SIZE: f64 = 100.0;

/// Body of `POST /orders/place` for this variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarOrder {
    pub size: f64,
    pub leverage: f64,
    pub entry_price: f64,
    pub scalar_value: f64,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct ScalarForm {
    size: f64,
    leverage: Leverage,
    entry_price: f64,
    scalar_value: f64,
    direction: Direction,
    mark_price: Option<f64>,
    submission: Submission,
}

impl Default for ScalarForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarForm {
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            leverage: Leverage::default(),
            entry_price: 0.0,
            scalar_value: 0.0,
            direction: Direction::Long,
            mark_price: None,
            submission: Submission::new(),
        }
    }

    pub fn seed(&mut self, snapshot: &MarketSnapshot) {
        self.mark_price = Some(snapshot.mark_price);
        self.reset_defaults();
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn leverage(&self) -> Leverage {
        self.leverage
    }

    pub fn entry_price(&self) -> f64 {
        self.entry_price
    }

    pub fn scalar_value(&self) -> f64 {
        self.scalar_value
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> SubmitState {
        self.submission.state()
    }

    pub fn result(&self) -> Option<&OrderResult> {
        self.submission.result()
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    pub fn set_leverage(&mut self, leverage: f64) {
        self.leverage = Leverage::new(leverage);
    }

    pub fn step_leverage(&mut self, up: bool) {
        self.leverage = if up {
            self.leverage.step_up()
        } else {
            self.leverage.step_down()
        };
    }

    pub fn set_entry_price(&mut self, price: f64) {
        self.entry_price = price;
    }

    pub fn set_scalar_value(&mut self, value: f64) {
        self.scalar_value = value;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_in_flight() {
            "Submitting..."
        } else {
            "Place Trade"
        }
    }

    pub fn order(&self) -> ScalarOrder {
        ScalarOrder {
            size: self.size,
            leverage: self.leverage.value(),
            entry_price: self.entry_price,
            scalar_value: self.scalar_value,
            direction: self.direction,
        }
    }

    pub fn begin_submit(&mut self) -> Result<ScalarOrder, FormError> {
        if !self.submission.begin() {
            return Err(FormError::InFlight);
        }
        Ok(self.order())
    }

    pub fn complete_place(&mut self, outcome: PlaceOutcome, now: Instant) {
        if matches!(outcome, PlaceOutcome::Accepted(_)) {
            self.reset_defaults();
        }
        self.submission.finish(OrderResult::from_place(&outcome), now);
    }

    /// Size 100, leverage 1, entry price and scalar value at the mark.
    /// Direction is kept.
    pub fn reset_defaults(&mut self) {
        let mark = self.mark_price.unwrap_or(0.0);
        self.size = DEFAULT_SIZE;
        self.leverage = Leverage::default();
        self.entry_price = mark;
        self.scalar_value = mark;
    }

    pub fn tick(&mut self, now: Instant) {
        self.submission.tick(now);
    }
}
