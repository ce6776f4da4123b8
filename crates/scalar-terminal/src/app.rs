// crates/scalar-terminal/src/app.rs

use std::time::Instant;

use chrono::{DateTime, Utc};
use scalar_core::error::parse_number;
use scalar_core::{CancelOutcome, Countdown, Direction, MarketSnapshot, PlaceOutcome};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info, warn};

use crate::config::FormVariant;
use crate::form::{Field, OrderForm};
use crate::network::{ApiEvent, ApiRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Market display state. There is exactly one fetch, so `Failed` is
/// final.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketView {
    Loading,
    Failed(String),
    Ready(MarketSnapshot),
}

pub struct App {
    pub base_url: String,

    // UI state
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub show_help: bool,

    // Market display
    pub market: MarketView,
    pub countdown: Countdown,

    // Order entry
    pub form: OrderForm,
    pub focus_index: usize,

    // Input buffer
    pub input_buffer: String,
    pub input_cursor: usize,

    /// One-line hint for rejected input, cleared by the next key.
    pub hint: Option<String>,

    network_tx: Option<UnboundedSender<ApiRequest>>,
}

impl App {
    pub fn new(variant: FormVariant, base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            input_mode: InputMode::Normal,
            should_quit: false,
            show_help: false,
            market: MarketView::Loading,
            countdown: Countdown::new(),
            form: OrderForm::new(variant),
            focus_index: 0,
            input_buffer: String::new(),
            input_cursor: 0,
            hint: None,
            network_tx: None,
        }
    }

    pub fn set_network_sender(&mut self, tx: UnboundedSender<ApiRequest>) {
        self.network_tx = Some(tx);
    }

    /// Issue the one market fetch.
    pub fn start(&mut self) {
        self.market = MarketView::Loading;
        if !self.send(ApiRequest::FetchMarket) {
            let reason = "market service unavailable";
            error!("Error fetching market data: {}", reason);
            self.market = MarketView::Failed(reason.to_string());
        }
    }

    /// Tear down timers owned by the app.
    pub fn shutdown(&mut self) {
        self.countdown.stop();
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.market, MarketView::Ready(_))
    }

    pub fn snapshot(&self) -> Option<&MarketSnapshot> {
        match &self.market {
            MarketView::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn focused_field(&self) -> Field {
        let order = self.form.focus_order();
        order[self.focus_index.min(order.len() - 1)]
    }

    pub fn next_field(&mut self) {
        let len = self.form.focus_order().len();
        self.focus_index = (self.focus_index + 1) % len;
    }

    pub fn prev_field(&mut self) {
        let len = self.form.focus_order().len();
        self.focus_index = (self.focus_index + len - 1) % len;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Enter in normal mode: edit a numeric field, flip direction, or
    /// submit when the button has focus.
    pub fn activate(&mut self) {
        if !self.is_ready() {
            return;
        }
        match self.focused_field() {
            Field::Submit => self.submit(),
            Field::Direction => self.form.step(Field::Direction, true),
            field => self.start_editing(field),
        }
    }

    fn start_editing(&mut self, field: Field) {
        let Some(value) = self.form.value(field) else {
            return;
        };
        if !self.form.is_editable(field) {
            return;
        }
        self.input_buffer = value.to_string();
        self.input_cursor = self.input_buffer.len();
        self.input_mode = InputMode::Editing;
    }

    /// Left/Right in normal mode.
    pub fn adjust(&mut self, up: bool) {
        if !self.is_ready() {
            return;
        }
        self.form.step(self.focused_field(), up);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_ready() {
            self.form.set_direction(direction);
        }
    }

    /// Commit the edit buffer to the focused field.
    pub fn submit_input(&mut self) {
        if !matches!(self.input_mode, InputMode::Editing) {
            return;
        }
        let field = self.focused_field();
        match parse_number(&self.input_buffer) {
            Ok(value) => {
                self.form.apply(field, value);
                self.hint = None;
            }
            Err(e) => {
                warn!("Rejected input for {:?}: {}", field, e);
                self.hint = Some(e.to_string());
            }
        }
        self.cancel_input();
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if let Some(c) = self.input_buffer[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
            self.input_buffer.remove(self.input_cursor);
        }
    }

    /// Place (or, with an open leveraged order, cancel).
    pub fn submit(&mut self) {
        if !self.is_ready() {
            return;
        }
        match self.form.begin_submit() {
            Ok(request) => {
                info!("Submitting {:?}", request);
                let is_cancel = matches!(request, ApiRequest::Cancel(_));
                if !self.send(request) {
                    // Nobody will answer; fail the submission right away.
                    let now = Instant::now();
                    if is_cancel {
                        self.form.complete_cancel(CancelOutcome::Unreachable, now);
                    } else {
                        self.form.complete_place(PlaceOutcome::Unreachable, now);
                    }
                }
            }
            Err(e) => {
                warn!("Submit rejected: {}", e);
                self.hint = Some(e.to_string());
            }
        }
    }

    pub fn handle_api_event(&mut self, event: ApiEvent, now: Instant, wall: DateTime<Utc>) {
        match event {
            ApiEvent::Market(Ok(snapshot)) => {
                info!("Market loaded: {} ({})", snapshot.title, snapshot.id);
                self.form.seed(&snapshot);
                self.countdown.set_expiry(snapshot.expiry, now, wall);
                self.market = MarketView::Ready(snapshot);
            }
            ApiEvent::Market(Err(e)) => {
                error!("Error fetching market data: {}", e);
                self.market = MarketView::Failed(e);
            }
            ApiEvent::Placed(outcome) => {
                info!("Place outcome: {:?}", outcome);
                self.form.complete_place(outcome, now);
            }
            ApiEvent::Cancelled(outcome) => {
                info!("Cancel outcome: {:?}", outcome);
                self.form.complete_cancel(outcome, now);
            }
        }
    }

    /// Advance the countdown and the result banner.
    pub fn on_tick(&mut self, now: Instant, wall: DateTime<Utc>) {
        self.countdown.tick(now, wall);
        self.form.tick(now);
    }

    fn send(&self, request: ApiRequest) -> bool {
        match &self.network_tx {
            Some(tx) => match tx.send(request) {
                Ok(()) => true,
                Err(e) => {
                    error!("API worker is gone: {}", e);
                    false
                }
            },
            None => false,
        }
    }
}
