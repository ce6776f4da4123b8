//! Backend answers to a place or cancel request, already classified.
//!
//! `scalar-protocol` turns an HTTP status + body into one of these; the
//! order forms only ever see the classified value.

use std::fmt;

/// Opaque order identifier assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        OrderId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        OrderId::new(s)
    }
}

impl From<u64> for OrderId {
    fn from(n: u64) -> Self {
        OrderId(n.to_string())
    }
}

/// Result of `POST /orders/place`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOutcome {
    /// 2xx with `status == "success"`.
    Accepted(OrderId),

    /// 2xx with any other status; carries the payload's `error`, if any.
    Rejected(Option<String>),

    /// Non-2xx; carries the payload's `detail`.
    Refused(String),

    /// Transport failure or an undecodable body.
    Unreachable,
}

/// Result of `POST /orders/{id}/cancel`.
#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    Cancelled,

    /// Non-2xx `detail`, or a 2xx body with an error status.
    Refused(String),

    Unreachable,
}
