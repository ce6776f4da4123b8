// crates/scalar-terminal/tests/app_flow.rs
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{TimeZone, Utc};
use scalar_core::banner::RESULT_DISPLAY;
use scalar_core::{
    CancelOutcome, Direction, MarketSnapshot, OrderId, OrderResult, PlaceOutcome, PriceRange,
    SubmitState,
};
use scalar_terminal::app::{App, InputMode, MarketView};
use scalar_terminal::config::FormVariant;
use scalar_terminal::form::Field;
use scalar_terminal::network::{ApiEvent, ApiRequest};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn snapshot(expiry_in: chrono::Duration) -> MarketSnapshot {
    let now = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
    MarketSnapshot {
        id: "test-market".to_string(),
        title: "Test Market".to_string(),
        description: "A market for tests".to_string(),
        range: PriceRange {
            min: 0.0,
            max: 100.0,
            tick_size: 1.0,
        },
        expiry: now + expiry_in,
        oracle_price: 50.5,
        mark_price: 50.0,
        currency: "USD".to_string(),
    }
}

fn wall() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()
}

/// App with a captured request channel and a loaded one-hour market.
fn loaded_app(variant: FormVariant) -> (App, UnboundedReceiver<ApiRequest>, Instant) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(variant, "http://127.0.0.1:8001");
    app.set_network_sender(tx);

    app.start();
    assert_eq!(rx.try_recv().unwrap(), ApiRequest::FetchMarket);
    assert_eq!(app.market, MarketView::Loading);

    let now = Instant::now();
    app.handle_api_event(
        ApiEvent::Market(Ok(snapshot(chrono::Duration::milliseconds(3_600_000)))),
        now,
        wall(),
    );
    (app, rx, now)
}

fn focus(app: &mut App, field: Field) {
    for _ in 0..app.form.focus_order().len() {
        if app.focused_field() == field {
            return;
        }
        app.next_field();
    }
    panic!("{field:?} is not focusable");
}

fn type_value(app: &mut App, text: &str) {
    app.activate();
    assert_eq!(app.input_mode, InputMode::Editing);
    while !app.input_buffer.is_empty() {
        app.delete_char();
    }
    for c in text.chars() {
        app.enter_char(c);
    }
    app.submit_input();
}

#[test]
fn market_load_seeds_form_and_countdown() {
    let (mut app, _rx, now) = loaded_app(FormVariant::Leveraged);

    assert!(app.is_ready());
    assert_eq!(app.form.value(Field::LimitPrice), Some(49.0));
    assert_eq!(app.form.value(Field::Size), Some(2.04));
    assert_eq!(app.countdown.label(), "1h 0m 0s");

    app.on_tick(now + Duration::from_secs(1), wall() + chrono::Duration::seconds(1));
    assert_eq!(app.countdown.label(), "59m 59s");

    app.on_tick(now + Duration::from_secs(3_600), wall() + chrono::Duration::hours(1));
    assert_eq!(app.countdown.label(), "EXPIRED");
}

#[test]
fn failed_market_load_is_final() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = App::new(FormVariant::Leveraged, "http://127.0.0.1:8001");
    app.set_network_sender(tx);
    app.start();

    app.handle_api_event(
        ApiEvent::Market(Err("connection refused".to_string())),
        Instant::now(),
        wall(),
    );
    assert_eq!(app.market, MarketView::Failed("connection refused".to_string()));

    // Nothing in the form reacts without a snapshot.
    app.submit();
    app.activate();
    assert_eq!(app.form.state(), SubmitState::Idle);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn editing_inputs_recomputes_size() {
    let (mut app, _rx, _now) = loaded_app(FormVariant::Leveraged);

    focus(&mut app, Field::LimitPrice);
    type_value(&mut app, "50");
    focus(&mut app, Field::Leverage);
    type_value(&mut app, "2");
    focus(&mut app, Field::InvestedAmount);
    type_value(&mut app, "100");

    assert_eq!(app.form.value(Field::Size), Some(4.0));

    focus(&mut app, Field::Leverage);
    app.adjust(true);
    assert_eq!(app.form.leverage_label(), "2.1x");
    assert_eq!(app.form.value(Field::Size), Some(4.2));
}

#[test]
fn invalid_input_leaves_field_unchanged() {
    let (mut app, _rx, _now) = loaded_app(FormVariant::Leveraged);

    focus(&mut app, Field::InvestedAmount);
    type_value(&mut app, "12abc");

    assert_eq!(app.form.value(Field::InvestedAmount), Some(100.0));
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.hint.as_deref().unwrap_or_default().contains("not a number"));
}

#[test]
fn size_is_not_focusable_in_leveraged_form() {
    let (app, _rx, _now) = loaded_app(FormVariant::Leveraged);
    assert!(!app.form.focus_order().contains(&Field::Size));
    assert!(app.form.is_read_only(Field::Size));
}

#[test]
fn place_then_cancel_round_trip() {
    let (mut app, mut rx, now) = loaded_app(FormVariant::Leveraged);

    app.submit();
    let request = rx.try_recv().unwrap();
    let ApiRequest::PlaceLeveraged(order) = request else {
        panic!("expected a leveraged place, got {request:?}");
    };
    assert_eq!(order.limit_px, 49.0);
    assert_eq!(order.direction, Direction::Long);
    assert_eq!(app.form.submit_label(), "Submitting...");

    // A second submit while in flight sends nothing.
    app.submit();
    assert!(rx.try_recv().is_err());
    assert!(app.hint.is_some());

    app.handle_api_event(
        ApiEvent::Placed(PlaceOutcome::Accepted(OrderId::from("abc"))),
        now,
        wall(),
    );
    assert_eq!(app.form.submit_label(), "Cancel Order");
    assert_eq!(
        app.form.result().map(ToString::to_string).as_deref(),
        Some("Trade executed successfully! Order ID: abc")
    );

    app.submit();
    assert_eq!(rx.try_recv().unwrap(), ApiRequest::Cancel(OrderId::from("abc")));

    let later = now + Duration::from_secs(2);
    app.handle_api_event(ApiEvent::Cancelled(CancelOutcome::Cancelled), later, wall());
    assert_eq!(app.form.result(), Some(&OrderResult::Cancelled));
    assert_eq!(app.form.submit_label(), "Submit Order");
    assert_eq!(app.form.value(Field::LimitPrice), Some(50.0));

    app.on_tick(later + RESULT_DISPLAY, wall());
    assert!(app.form.result().is_none());
    assert_eq!(app.form.state(), SubmitState::Idle);
}

#[test]
fn scalar_form_submits_scalar_order() {
    let (mut app, mut rx, now) = loaded_app(FormVariant::Scalar);

    assert_eq!(app.form.value(Field::EntryPrice), Some(50.0));
    assert_eq!(app.form.value(Field::ScalarValue), Some(50.0));

    focus(&mut app, Field::ScalarValue);
    type_value(&mut app, "72.5");
    app.set_direction(Direction::Short);

    focus(&mut app, Field::Submit);
    app.activate();
    let request = rx.try_recv().unwrap();
    let ApiRequest::PlaceScalar(order) = request else {
        panic!("expected a scalar place, got {request:?}");
    };
    assert_eq!(order.scalar_value, 72.5);
    assert_eq!(order.direction, Direction::Short);

    app.handle_api_event(
        ApiEvent::Placed(PlaceOutcome::Accepted(OrderId::from("42"))),
        now,
        wall(),
    );
    assert_eq!(app.form.value(Field::ScalarValue), Some(50.0));
    assert_eq!(app.form.submit_label(), "Place Trade");
}

#[test]
fn submit_without_worker_fails_immediately() {
    let mut app = App::new(FormVariant::Leveraged, "http://127.0.0.1:8001");
    app.start();
    assert!(matches!(app.market, MarketView::Failed(_)));

    // Load a market by hand; there is still no worker to talk to.
    app.handle_api_event(
        ApiEvent::Market(Ok(snapshot(chrono::Duration::days(30)))),
        Instant::now(),
        wall(),
    );
    app.submit();
    assert_eq!(app.form.state(), SubmitState::Failed);
    assert_eq!(app.form.result(), Some(&OrderResult::PlaceUnreachable));
}

#[test]
fn start_without_worker_logs_the_failure() {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let mut app = App::new(FormVariant::Leveraged, "http://127.0.0.1:8001");
    tracing::subscriber::with_default(subscriber, || app.start());

    assert_eq!(
        app.market,
        MarketView::Failed("market service unavailable".to_string())
    );
    let logs = capture.contents();
    assert!(logs.contains("ERROR"), "logs: {logs}");
    assert!(logs.contains("market service unavailable"), "logs: {logs}");
}

#[test]
fn fractional_investment_is_not_sent() {
    let (mut app, mut rx, _now) = loaded_app(FormVariant::Leveraged);

    focus(&mut app, Field::InvestedAmount);
    type_value(&mut app, "0.5");
    assert_eq!(app.form.value(Field::InvestedAmount), Some(0.5));

    app.submit();
    assert!(rx.try_recv().is_err());
    assert_eq!(app.form.state(), SubmitState::Idle);
    assert!(app
        .hint
        .as_deref()
        .unwrap_or_default()
        .contains("investment must be a whole amount"));

    type_value(&mut app, "25");
    app.submit();
    assert!(matches!(
        rx.try_recv().unwrap(),
        ApiRequest::PlaceLeveraged(order) if order.invested_amount == 25.0
    ));
}
