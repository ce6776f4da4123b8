//! Variant A: leveraged limit order with cancel.
//!
//! Fields: direction, invested amount, leverage, limit price, and the
//! derived position size. Size is never set directly; every setter that
//! touches one of its three inputs recomputes it before returning.
//!
//! Submit has two modes. Without an open order it places one; once the
//! backend returns an order id, the next submit cancels that order.

use std::time::Instant;

use crate::banner::OrderResult;
use crate::direction::Direction;
use crate::error::FormError;
use crate::leverage::Leverage;
use crate::market::{round_to, MarketSnapshot};
use crate::outcome::{CancelOutcome, OrderId, PlaceOutcome};
use crate::submission::{SubmitState, Submission};

pub const DEFAULT_INVESTED_AMOUNT: f64 = 100.0;
pub const DEFAULT_SIZE: f64 = 100.0;
pub const MIN_INVESTED_AMOUNT: f64 = 1.0;

/// Body of `POST /orders/place` for this variant.
#[derive(Debug, Clone, PartialEq)]
pub struct LeveragedOrder {
    pub invested_amount: f64,
    pub size: f64,
    pub leverage: f64,
    pub direction: Direction,
    pub limit_px: f64,
}

/// What a submit should send to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum LeveragedRequest {
    Place(LeveragedOrder),
    Cancel(OrderId),
}

/// `round2(invested × leverage / limit_px)`, or 0 when the limit price
/// or invested amount is not positive, or the result is not finite.
pub fn derive_size(invested_amount: f64, leverage: f64, limit_px: f64) -> f64 {
    // `> 0.0` is false for NaN too.
    let positive = |v: f64| v > 0.0;
    if !positive(invested_amount) || !positive(limit_px) {
        return 0.0;
    }
    let size = invested_amount * leverage / limit_px;
    if size.is_finite() {
        round_to(size, 2)
    } else {
        0.0
    }
}

fn check_invested_amount(amount: f64) -> Result<(), FormError> {
    if amount < MIN_INVESTED_AMOUNT || amount.fract() != 0.0 {
        return Err(FormError::InvalidInvestment(amount));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LeveragedForm {
    invested_amount: f64,
    size: f64,
    leverage: Leverage,
    direction: Direction,
    limit_px: f64,

    /// Mark price of the snapshot the form was seeded from.
    mark_price: Option<f64>,

    /// Set after a successful place; switches submit to cancel.
    open_order: Option<OrderId>,

    submission: Submission,
}

impl Default for LeveragedForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LeveragedForm {
    pub fn new() -> Self {
        Self {
            invested_amount: DEFAULT_INVESTED_AMOUNT,
            size: DEFAULT_SIZE,
            leverage: Leverage::default(),
            direction: Direction::Long,
            limit_px: 0.0,
            mark_price: None,
            open_order: None,
            submission: Submission::new(),
        }
    }

    /// Seed defaults from a freshly fetched snapshot.
    pub fn seed(&mut self, snapshot: &MarketSnapshot) {
        self.mark_price = Some(snapshot.mark_price);
        self.limit_px = snapshot.seed_limit_price(self.direction);
        self.recompute_size();
    }

    pub fn invested_amount(&self) -> f64 {
        self.invested_amount
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn leverage(&self) -> Leverage {
        self.leverage
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn limit_px(&self) -> f64 {
        self.limit_px
    }

    pub fn open_order(&self) -> Option<&OrderId> {
        self.open_order.as_ref()
    }

    pub fn state(&self) -> SubmitState {
        self.submission.state()
    }

    pub fn result(&self) -> Option<&OrderResult> {
        self.submission.result()
    }

    pub fn set_invested_amount(&mut self, amount: f64) {
        self.invested_amount = amount;
        self.recompute_size();
    }

    pub fn set_leverage(&mut self, leverage: f64) {
        self.leverage = Leverage::new(leverage);
        self.recompute_size();
    }

    pub fn step_leverage(&mut self, up: bool) {
        self.leverage = if up {
            self.leverage.step_up()
        } else {
            self.leverage.step_down()
        };
        self.recompute_size();
    }

    pub fn set_limit_px(&mut self, limit_px: f64) {
        self.limit_px = if limit_px.is_finite() { limit_px } else { 0.0 };
        self.recompute_size();
    }

    /// Direction is not a size input; the limit price is left as is.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_in_flight() {
            "Submitting..."
        } else if self.open_order.is_some() {
            "Cancel Order"
        } else {
            "Submit Order"
        }
    }

    /// Current field values as a place request body.
    pub fn order(&self) -> LeveragedOrder {
        LeveragedOrder {
            invested_amount: self.invested_amount,
            size: self.size,
            leverage: self.leverage.value(),
            direction: self.direction,
            limit_px: self.limit_px,
        }
    }

    /// Start a submission: a cancel if an order is open, else a place.
    ///
    /// A place needs a whole-number investment of at least
    /// [`MIN_INVESTED_AMOUNT`]; a rejected place leaves the form idle.
    pub fn begin_submit(&mut self) -> Result<LeveragedRequest, FormError> {
        if self.submission.is_in_flight() {
            return Err(FormError::InFlight);
        }
        let request = match &self.open_order {
            Some(id) => LeveragedRequest::Cancel(id.clone()),
            None => {
                check_invested_amount(self.invested_amount)?;
                LeveragedRequest::Place(self.order())
            }
        };
        self.submission.begin();
        Ok(request)
    }

    pub fn complete_place(&mut self, outcome: PlaceOutcome, now: Instant) {
        if let PlaceOutcome::Accepted(id) = &outcome {
            self.open_order = Some(id.clone());
        }
        self.submission.finish(OrderResult::from_place(&outcome), now);
    }

    /// Every cancel outcome resets the form and forgets the open order;
    /// the message reports what actually happened.
    pub fn complete_cancel(&mut self, outcome: CancelOutcome, now: Instant) {
        self.reset_defaults();
        self.open_order = None;
        self.submission.finish(OrderResult::from_cancel(&outcome), now);
    }

    /// Leverage 1 and limit price at the mark; size is re-derived from
    /// the reset inputs.
    pub fn reset_defaults(&mut self) {
        self.leverage = Leverage::default();
        self.limit_px = self.mark_price.unwrap_or(0.0);
        self.recompute_size();
    }

    pub fn tick(&mut self, now: Instant) {
        self.submission.tick(now);
    }

    fn recompute_size(&mut self) {
        self.size = derive_size(self.invested_amount, self.leverage.value(), self.limit_px);
    }
}
