//! The configured order-form variant behind one interface.
//!
//! The app and the renderer talk to [`OrderForm`] in terms of
//! [`Field`]s, so neither needs to know which variant is active.

use std::time::Instant;

use scalar_core::{
    CancelOutcome, Direction, FormError, LeveragedForm, LeveragedRequest, MarketSnapshot,
    OrderResult, PlaceOutcome, ScalarForm, SubmitState,
};

use crate::config::FormVariant;
use crate::network::ApiRequest;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Direction,
    InvestedAmount,
    Leverage,
    Size,
    LimitPrice,
    EntryPrice,
    ScalarValue,
    Submit,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Direction => "Position",
            Field::InvestedAmount => "Investment (USD)",
            Field::Leverage => "Leverage",
            Field::Size => "Position Size (Contracts)",
            Field::LimitPrice => "Limit Price (USD)",
            Field::EntryPrice => "Entry Price",
            Field::ScalarValue => "Target Scalar Value",
            Field::Submit => "Submit",
        }
    }
}

const LEVERAGED_ROWS: &[Field] = &[
    Field::Direction,
    Field::InvestedAmount,
    Field::Leverage,
    Field::Size,
    Field::LimitPrice,
];

const LEVERAGED_FOCUS: &[Field] = &[
    Field::Direction,
    Field::InvestedAmount,
    Field::Leverage,
    Field::LimitPrice,
    Field::Submit,
];

const SCALAR_ROWS: &[Field] = &[
    Field::Direction,
    Field::Size,
    Field::Leverage,
    Field::EntryPrice,
    Field::ScalarValue,
];

const SCALAR_FOCUS: &[Field] = &[
    Field::Direction,
    Field::Size,
    Field::Leverage,
    Field::EntryPrice,
    Field::ScalarValue,
    Field::Submit,
];

#[derive(Debug, Clone)]
pub enum OrderForm {
    Leveraged(LeveragedForm),
    Scalar(ScalarForm),
}

impl OrderForm {
    pub fn new(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Leveraged => OrderForm::Leveraged(LeveragedForm::new()),
            FormVariant::Scalar => OrderForm::Scalar(ScalarForm::new()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OrderForm::Leveraged(_) => " Execute Trade ",
            OrderForm::Scalar(_) => " Scalar Trade ",
        }
    }

    /// Rows to render, read-only ones included.
    pub fn rows(&self) -> &'static [Field] {
        match self {
            OrderForm::Leveraged(_) => LEVERAGED_ROWS,
            OrderForm::Scalar(_) => SCALAR_ROWS,
        }
    }

    /// Focus order: editable rows, then the submit button.
    pub fn focus_order(&self) -> &'static [Field] {
        match self {
            OrderForm::Leveraged(_) => LEVERAGED_FOCUS,
            OrderForm::Scalar(_) => SCALAR_FOCUS,
        }
    }

    pub fn is_read_only(&self, field: Field) -> bool {
        matches!((self, field), (OrderForm::Leveraged(_), Field::Size))
    }

    pub fn seed(&mut self, snapshot: &MarketSnapshot) {
        match self {
            OrderForm::Leveraged(form) => form.seed(snapshot),
            OrderForm::Scalar(form) => form.seed(snapshot),
        }
    }

    /// Numeric value of a field, `None` for non-numeric ones.
    pub fn value(&self, field: Field) -> Option<f64> {
        match (self, field) {
            (OrderForm::Leveraged(form), Field::InvestedAmount) => Some(form.invested_amount()),
            (OrderForm::Leveraged(form), Field::Leverage) => Some(form.leverage().value()),
            (OrderForm::Leveraged(form), Field::Size) => Some(form.size()),
            (OrderForm::Leveraged(form), Field::LimitPrice) => Some(form.limit_px()),
            (OrderForm::Scalar(form), Field::Size) => Some(form.size()),
            (OrderForm::Scalar(form), Field::Leverage) => Some(form.leverage().value()),
            (OrderForm::Scalar(form), Field::EntryPrice) => Some(form.entry_price()),
            (OrderForm::Scalar(form), Field::ScalarValue) => Some(form.scalar_value()),
            _ => None,
        }
    }

    pub fn is_editable(&self, field: Field) -> bool {
        self.value(field).is_some() && !self.is_read_only(field)
    }

    /// Write a committed value. Read-only and non-numeric fields ignore it.
    pub fn apply(&mut self, field: Field, value: f64) {
        match (self, field) {
            (OrderForm::Leveraged(form), Field::InvestedAmount) => form.set_invested_amount(value),
            (OrderForm::Leveraged(form), Field::Leverage) => form.set_leverage(value),
            (OrderForm::Leveraged(form), Field::LimitPrice) => form.set_limit_px(value),
            (OrderForm::Scalar(form), Field::Size) => form.set_size(value),
            (OrderForm::Scalar(form), Field::Leverage) => form.set_leverage(value),
            (OrderForm::Scalar(form), Field::EntryPrice) => form.set_entry_price(value),
            (OrderForm::Scalar(form), Field::ScalarValue) => form.set_scalar_value(value),
            _ => {}
        }
    }

    /// Left/Right on a field: leverage moves one step, direction flips.
    pub fn step(&mut self, field: Field, up: bool) {
        match field {
            Field::Leverage => match self {
                OrderForm::Leveraged(form) => form.step_leverage(up),
                OrderForm::Scalar(form) => form.step_leverage(up),
            },
            Field::Direction => self.set_direction(self.direction().flip()),
            _ => {}
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            OrderForm::Leveraged(form) => form.direction(),
            OrderForm::Scalar(form) => form.direction(),
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        match self {
            OrderForm::Leveraged(form) => form.set_direction(direction),
            OrderForm::Scalar(form) => form.set_direction(direction),
        }
    }

    pub fn leverage_label(&self) -> String {
        match self {
            OrderForm::Leveraged(form) => form.leverage().to_string(),
            OrderForm::Scalar(form) => form.leverage().to_string(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            OrderForm::Leveraged(form) => form.submit_label(),
            OrderForm::Scalar(form) => form.submit_label(),
        }
    }

    pub fn state(&self) -> SubmitState {
        match self {
            OrderForm::Leveraged(form) => form.state(),
            OrderForm::Scalar(form) => form.state(),
        }
    }

    pub fn result(&self) -> Option<&OrderResult> {
        match self {
            OrderForm::Leveraged(form) => form.result(),
            OrderForm::Scalar(form) => form.result(),
        }
    }

    /// Start a submission and return the request to send.
    pub fn begin_submit(&mut self) -> Result<ApiRequest, FormError> {
        match self {
            OrderForm::Leveraged(form) => Ok(match form.begin_submit()? {
                LeveragedRequest::Place(order) => ApiRequest::PlaceLeveraged(order),
                LeveragedRequest::Cancel(order_id) => ApiRequest::Cancel(order_id),
            }),
            OrderForm::Scalar(form) => form.begin_submit().map(ApiRequest::PlaceScalar),
        }
    }

    pub fn complete_place(&mut self, outcome: PlaceOutcome, now: Instant) {
        match self {
            OrderForm::Leveraged(form) => form.complete_place(outcome, now),
            OrderForm::Scalar(form) => form.complete_place(outcome, now),
        }
    }

    /// Only the leveraged form has orders to cancel; a stray cancel
    /// outcome for the scalar form is dropped.
    pub fn complete_cancel(&mut self, outcome: CancelOutcome, now: Instant) {
        if let OrderForm::Leveraged(form) = self {
            form.complete_cancel(outcome, now);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        match self {
            OrderForm::Leveraged(form) => form.tick(now),
            OrderForm::Scalar(form) => form.tick(now),
        }
    }
}
