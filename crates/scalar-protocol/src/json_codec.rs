//! JSON codec and HTTP reply classification.
//!
//! Place reply rules:
//!
//! ```text
//! 2xx, status == "success", order_id  → Accepted(order_id)
//! 2xx, any other status               → Rejected(error)
//! non-2xx, JSON body                  → Refused(detail | "HTTP {code}")
//! anything that fails to decode       → Unreachable (via place_outcome)
//! ```
//!
//! Cancel replies follow the same shape; any decodable 2xx body without
//! an error status counts as cancelled.

use chrono::{DateTime, NaiveDateTime, Utc};
use scalar_core::{CancelOutcome, MarketSnapshot, OrderId, PlaceOutcome, PriceRange};
use thiserror::Error;

use crate::wire_types::{
    CancelReplyWire, ErrorReplyWire, MarketWire, PlaceReplyWire, STATUS_ERROR, STATUS_SUCCESS,
};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid expiry timestamp `{0}`")]
    InvalidExpiry(String),

    #[error("success reply without an order_id")]
    MissingOrderId,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a `GET /market` body.
pub fn decode_market(body: &str) -> Result<MarketSnapshot, ProtocolError> {
    let wire: MarketWire = serde_json::from_str(body)?;
    let expiry = parse_expiry(&wire.expiry)?;

    Ok(MarketSnapshot {
        id: wire.id,
        title: wire.title,
        description: wire.description,
        range: PriceRange {
            min: wire.range.min,
            max: wire.range.max,
            tick_size: wire.range.tick_size,
        },
        expiry,
        oracle_price: wire.oracle_price,
        mark_price: wire.mark_price,
        currency: wire.currency,
    })
}

/// RFC 3339 first; a timestamp without an offset is taken as UTC.
pub fn parse_expiry(raw: &str) -> Result<DateTime<Utc>, ProtocolError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ProtocolError::InvalidExpiry(raw.to_string()))
}

/// Classify a `POST /orders/place` reply.
pub fn decode_place_reply(status: u16, body: &str) -> Result<PlaceOutcome, ProtocolError> {
    if !is_success(status) {
        return Ok(PlaceOutcome::Refused(decode_detail(status, body)?));
    }

    let reply: PlaceReplyWire = serde_json::from_str(body)?;
    if reply.status != STATUS_SUCCESS {
        return Ok(PlaceOutcome::Rejected(reply.error));
    }

    let order_id = reply.order_id.ok_or(ProtocolError::MissingOrderId)?;
    Ok(PlaceOutcome::Accepted(OrderId::from(order_id)))
}

/// Classify a `POST /orders/{id}/cancel` reply.
pub fn decode_cancel_reply(status: u16, body: &str) -> Result<CancelOutcome, ProtocolError> {
    if !is_success(status) {
        return Ok(CancelOutcome::Refused(decode_detail(status, body)?));
    }

    let reply: CancelReplyWire = serde_json::from_str(body)?;
    if reply.status.as_deref() == Some(STATUS_ERROR) {
        let error = reply.error.unwrap_or_else(|| "cancel failed".to_string());
        return Ok(CancelOutcome::Refused(error));
    }
    Ok(CancelOutcome::Cancelled)
}

/// Like [`decode_place_reply`], with decode failures folded into
/// [`PlaceOutcome::Unreachable`].
pub fn place_outcome(status: u16, body: &str) -> PlaceOutcome {
    decode_place_reply(status, body).unwrap_or(PlaceOutcome::Unreachable)
}

/// Like [`decode_cancel_reply`], with decode failures folded into
/// [`CancelOutcome::Unreachable`].
pub fn cancel_outcome(status: u16, body: &str) -> CancelOutcome {
    decode_cancel_reply(status, body).unwrap_or(CancelOutcome::Unreachable)
}

fn decode_detail(status: u16, body: &str) -> Result<String, ProtocolError> {
    let reply: ErrorReplyWire = serde_json::from_str(body)?;
    Ok(match reply.detail {
        Some(serde_json::Value::String(text)) => text,
        Some(serde_json::Value::Null) | None => format!("HTTP {status}"),
        Some(other) => other.to_string(),
    })
}
