// crates/scalar-core/tests/timers.rs
use std::time::{Duration, Instant};

use scalar_core::banner::RESULT_DISPLAY;
use scalar_core::{Interval, OrderId, OrderResult, ResultBanner, Timeout};

#[test]
fn timeout_fires_once() {
    let start = Instant::now();
    let mut timeout = Timeout::new();
    timeout.arm(start, Duration::from_secs(10));

    assert!(!timeout.fire(start + Duration::from_secs(9)));
    assert!(timeout.fire(start + Duration::from_secs(10)));
    assert!(!timeout.fire(start + Duration::from_secs(11)));
    assert!(!timeout.is_armed());
}

#[test]
fn cancelled_timeout_never_fires() {
    let start = Instant::now();
    let mut timeout = Timeout::new();
    timeout.arm(start, Duration::from_secs(1));
    timeout.cancel();
    assert!(!timeout.fire(start + Duration::from_secs(5)));
}

#[test]
fn interval_collapses_missed_ticks() {
    let start = Instant::now();
    let mut interval = Interval::new(Duration::from_secs(1));
    assert!(!interval.poll(start + Duration::from_secs(5)));

    interval.start(start);
    // 3.5 periods late: one tick, next due at 4s.
    assert!(interval.poll(start + Duration::from_millis(3_500)));
    assert!(!interval.poll(start + Duration::from_millis(3_900)));
    assert!(interval.poll(start + Duration::from_secs(4)));
}

#[test]
fn banner_clears_after_ten_seconds() {
    let start = Instant::now();
    let mut banner = ResultBanner::new();
    banner.show(OrderResult::Placed(OrderId::from("abc")), start);

    assert!(!banner.tick(start + RESULT_DISPLAY - Duration::from_millis(1)));
    assert!(banner.current().is_some());

    assert!(banner.tick(start + RESULT_DISPLAY));
    assert!(banner.current().is_none());
}

#[test]
fn new_result_replaces_and_restarts_window() {
    let start = Instant::now();
    let mut banner = ResultBanner::new();
    banner.show(OrderResult::Placed(OrderId::from("abc")), start);

    let later = start + Duration::from_secs(6);
    banner.show(OrderResult::Cancelled, later);
    assert_eq!(banner.current(), Some(&OrderResult::Cancelled));

    // The first result's deadline no longer clears anything.
    assert!(!banner.tick(start + RESULT_DISPLAY));
    assert_eq!(banner.current(), Some(&OrderResult::Cancelled));

    assert!(banner.tick(later + RESULT_DISPLAY));
    assert!(banner.current().is_none());
}

#[test]
fn result_messages() {
    assert_eq!(
        OrderResult::Placed(OrderId::from("abc")).to_string(),
        "Trade executed successfully! Order ID: abc"
    );
    assert_eq!(OrderResult::Cancelled.to_string(), "Order cancelled.");
    assert_eq!(
        OrderResult::Rejected("insufficient margin".into()).to_string(),
        "Error: insufficient margin"
    );
    assert_eq!(
        OrderResult::PlaceUnreachable.to_string(),
        "Error executing trade. Please try again."
    );
    assert_eq!(
        OrderResult::CancelUnreachable.to_string(),
        "Error occurred. Please try again."
    );

    assert!(!OrderResult::Cancelled.is_error());
    assert!(OrderResult::PlaceUnreachable.is_error());
}
