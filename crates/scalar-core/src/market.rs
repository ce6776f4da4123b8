//! Market snapshot as returned by `GET /market`.
//!
//! A snapshot is immutable once fetched. A later fetch replaces it
//! wholesale; nothing updates it field by field.

use chrono::{DateTime, Utc};

use crate::direction::Direction;

/// Bounded settlement range of a scalar market.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    /// Minimum price increment.
    pub tick_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub range: PriceRange,
    pub expiry: DateTime<Utc>,
    pub oracle_price: f64,
    pub mark_price: f64,
    pub currency: String,
}

impl MarketSnapshot {
    /// Default limit price for a new order: one tick through the mark
    /// on the passive side (below for long, above for short), rounded to
    /// one decimal.
    pub fn seed_limit_price(&self, direction: Direction) -> f64 {
        let px = match direction {
            Direction::Long => self.mark_price - self.range.tick_size,
            Direction::Short => self.mark_price + self.range.tick_size,
        };
        round_to(px, 1)
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
