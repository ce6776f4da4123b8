// crates/scalar-protocol/tests/json_codec.rs
use chrono::{TimeZone, Utc};
use scalar_core::{
    CancelOutcome, Direction, LeveragedOrder, OrderId, PlaceOutcome, ScalarOrder,
};
use scalar_protocol::json_codec::parse_expiry;
use scalar_protocol::wire_types::{cancel_path, LeveragedOrderWire, ScalarOrderWire};
use scalar_protocol::{
    cancel_outcome, decode_cancel_reply, decode_market, decode_place_reply, place_outcome,
    ProtocolError,
};

const BACKEND_MARKET: &str = r#"{
    "id": "ETH",
    "title": "ETH/USDC",
    "range": { "min": 1000.0, "max": 2000.0, "tick_size": 1.0 },
    "expiry": "2025-09-02T00:00:00Z",
    "oracle_price": 1850.1,
    "mark_price": 1848.04
}"#;

#[test]
fn decodes_market_with_optional_fields_missing() {
    let market = decode_market(BACKEND_MARKET).unwrap();
    assert_eq!(market.id, "ETH");
    assert_eq!(market.title, "ETH/USDC");
    assert_eq!(market.description, "");
    assert_eq!(market.currency, "USD");
    assert_eq!(market.range.tick_size, 1.0);
    assert_eq!(market.mark_price, 1848.04);
    assert_eq!(market.expiry, Utc.with_ymd_and_hms(2025, 9, 2, 0, 0, 0).unwrap());
}

#[test]
fn decodes_full_market() {
    let body = r#"{
        "id": "btc-dominance-eom",
        "title": "BTC Dominance % at End Of Month",
        "description": "Bitcoin dominance percentage at end of month",
        "range": { "min": 30.0, "max": 90.0, "tick_size": 0.1 },
        "expiry": "2025-10-01T12:30:00+02:00",
        "oracle_price": 52.3,
        "mark_price": 52.1,
        "currency": "PCT"
    }"#;
    let market = decode_market(body).unwrap();
    assert_eq!(market.description, "Bitcoin dominance percentage at end of month");
    assert_eq!(market.currency, "PCT");
    assert_eq!(market.expiry, Utc.with_ymd_and_hms(2025, 10, 1, 10, 30, 0).unwrap());
}

#[test]
fn expiry_without_offset_is_utc() {
    assert_eq!(
        parse_expiry("2025-09-02T00:00:00").unwrap(),
        Utc.with_ymd_and_hms(2025, 9, 2, 0, 0, 0).unwrap()
    );
    assert!(matches!(
        parse_expiry("next tuesday"),
        Err(ProtocolError::InvalidExpiry(_))
    ));
}

#[test]
fn market_with_bad_body_is_an_error() {
    assert!(matches!(decode_market("<html>"), Err(ProtocolError::Json(_))));
    assert!(matches!(decode_market(r#"{"id":"x"}"#), Err(ProtocolError::Json(_))));
}

#[test]
fn place_success_with_string_or_integer_id() {
    assert_eq!(
        decode_place_reply(200, r#"{"status":"success","order_id":"abc"}"#).unwrap(),
        PlaceOutcome::Accepted(OrderId::from("abc"))
    );
    assert_eq!(
        decode_place_reply(200, r#"{"status":"success","order_id":123456,"error":null}"#).unwrap(),
        PlaceOutcome::Accepted(OrderId::from("123456"))
    );
}

#[test]
fn place_success_without_id_is_undecodable() {
    assert!(matches!(
        decode_place_reply(200, r#"{"status":"success"}"#),
        Err(ProtocolError::MissingOrderId)
    ));
    assert_eq!(place_outcome(200, r#"{"status":"success"}"#), PlaceOutcome::Unreachable);
}

#[test]
fn place_application_error() {
    assert_eq!(
        place_outcome(200, r#"{"order_id":null,"status":"error","error":"Insufficient margin"}"#),
        PlaceOutcome::Rejected(Some("Insufficient margin".into()))
    );
    assert_eq!(
        place_outcome(200, r#"{"status":"error"}"#),
        PlaceOutcome::Rejected(None)
    );
}

#[test]
fn place_http_error_uses_detail() {
    assert_eq!(
        place_outcome(400, r#"{"detail":"Cannot trade on markets expiring in less than 24 hours"}"#),
        PlaceOutcome::Refused("Cannot trade on markets expiring in less than 24 hours".into())
    );
    assert_eq!(place_outcome(500, "{}"), PlaceOutcome::Refused("HTTP 500".into()));

    // Validation errors carry structured detail; it is shown as JSON.
    let outcome = place_outcome(422, r#"{"detail":[{"loc":["body","size"],"msg":"field required"}]}"#);
    let PlaceOutcome::Refused(text) = outcome else {
        panic!("expected Refused, got {outcome:?}");
    };
    assert!(text.contains("field required"));
}

#[test]
fn place_non_json_body_is_unreachable() {
    assert_eq!(place_outcome(502, "Bad Gateway"), PlaceOutcome::Unreachable);
    assert_eq!(place_outcome(200, ""), PlaceOutcome::Unreachable);
}

#[test]
fn cancel_replies() {
    assert_eq!(
        decode_cancel_reply(200, r#"{"status":"cancelled"}"#).unwrap(),
        CancelOutcome::Cancelled
    );
    assert_eq!(cancel_outcome(200, "{}"), CancelOutcome::Cancelled);
    assert_eq!(
        cancel_outcome(200, r#"{"status":"error","error":"already filled"}"#),
        CancelOutcome::Refused("already filled".into())
    );
    assert_eq!(
        cancel_outcome(404, r#"{"detail":"Order not found"}"#),
        CancelOutcome::Refused("Order not found".into())
    );
    assert_eq!(cancel_outcome(200, "not json"), CancelOutcome::Unreachable);
}

#[test]
fn order_bodies_serialize_with_lowercase_direction() {
    let leveraged = LeveragedOrder {
        invested_amount: 100.0,
        size: 4.0,
        leverage: 2.0,
        direction: Direction::Long,
        limit_px: 50.0,
    };
    let json = serde_json::to_value(LeveragedOrderWire::from(&leveraged)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "invested_amount": 100.0,
            "size": 4.0,
            "leverage": 2.0,
            "direction": "long",
            "limit_px": 50.0
        })
    );

    let scalar = ScalarOrder {
        size: 100.0,
        leverage: 1.5,
        entry_price: 52.3,
        scalar_value: 60.0,
        direction: Direction::Short,
    };
    let json = serde_json::to_value(ScalarOrderWire::from(&scalar)).unwrap();
    assert_eq!(json["direction"], "short");
    assert_eq!(json["scalar_value"], 60.0);
    assert_eq!(json["entry_price"], 52.3);
}

#[test]
fn cancel_path_encodes_id() {
    assert_eq!(cancel_path(&OrderId::from("abc")), "/orders/abc/cancel");
    assert_eq!(cancel_path(&OrderId::from(42u64)), "/orders/42/cancel");
    assert_eq!(cancel_path(&OrderId::from("a/b c")), "/orders/a%2Fb%20c/cancel");
}
