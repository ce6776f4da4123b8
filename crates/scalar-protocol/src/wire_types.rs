//! JSON payload shapes and endpoint paths.
//!
//! These are serde mirrors of what the backend sends and expects. The
//! conversion into `scalar_core` types lives in `json_codec`.

use scalar_core::{Direction, LeveragedOrder, OrderId, ScalarOrder};
use serde::{Deserialize, Serialize};

pub const MARKET_PATH: &str = "/market";
pub const PLACE_PATH: &str = "/orders/place";

/// `status` value of an accepted order.
pub const STATUS_SUCCESS: &str = "success";

/// `status` value of an application-level failure.
pub const STATUS_ERROR: &str = "error";

/// Used when a snapshot carries no `currency`.
pub const DEFAULT_CURRENCY: &str = "USD";

/// `/orders/{id}/cancel`, with the id percent-encoded.
pub fn cancel_path(order_id: &OrderId) -> String {
    format!("/orders/{}/cancel", urlencoding::encode(order_id.as_str()))
}

/// `GET /market` body.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketWire {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub range: RangeWire,
    pub expiry: String,
    pub oracle_price: f64,
    pub mark_price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RangeWire {
    pub min: f64,
    pub max: f64,
    pub tick_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionWire {
    Long,
    Short,
}

impl From<Direction> for DirectionWire {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Long => DirectionWire::Long,
            Direction::Short => DirectionWire::Short,
        }
    }
}

/// Variant A place body.
#[derive(Debug, Clone, Serialize)]
pub struct LeveragedOrderWire {
    pub invested_amount: f64,
    pub size: f64,
    pub leverage: f64,
    pub direction: DirectionWire,
    pub limit_px: f64,
}

impl From<&LeveragedOrder> for LeveragedOrderWire {
    fn from(order: &LeveragedOrder) -> Self {
        Self {
            invested_amount: order.invested_amount,
            size: order.size,
            leverage: order.leverage,
            direction: order.direction.into(),
            limit_px: order.limit_px,
        }
    }
}

/// Variant B place body.
#[derive(Debug, Clone, Serialize)]
pub struct ScalarOrderWire {
    pub size: f64,
    pub leverage: f64,
    pub entry_price: f64,
    pub scalar_value: f64,
    pub direction: DirectionWire,
}

impl From<&ScalarOrder> for ScalarOrderWire {
    fn from(order: &ScalarOrder) -> Self {
        Self {
            size: order.size,
            leverage: order.leverage,
            entry_price: order.entry_price,
            scalar_value: order.scalar_value,
            direction: order.direction.into(),
        }
    }
}

/// Order ids arrive as either strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OrderIdWire {
    Text(String),
    Number(u64),
}

impl From<OrderIdWire> for OrderId {
    fn from(id: OrderIdWire) -> Self {
        match id {
            OrderIdWire::Text(s) => OrderId::new(s),
            OrderIdWire::Number(n) => OrderId::from(n),
        }
    }
}

/// 2xx body of `POST /orders/place`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceReplyWire {
    pub status: String,
    #[serde(default)]
    pub order_id: Option<OrderIdWire>,
    #[serde(default)]
    pub error: Option<String>,
}

/// 2xx body of `POST /orders/{id}/cancel`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CancelReplyWire {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Non-2xx body. `detail` is usually a string, but validation errors
/// carry a structured value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorReplyWire {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}
