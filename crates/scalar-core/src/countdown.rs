//! Time-to-expiry countdown.
//!
//! Formatting rules (coarsest non-zero unit first, components floored):
//!
//! ```text
//! >= 1 day    : "{d}d {h}h {m}m"
//! >= 1 hour   : "{h}h {m}m {s}s"
//! >= 1 minute : "{m}m {s}s"
//! otherwise   : "{s}s"
//! <= 0        : "EXPIRED"
//! ```

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::schedule::Interval;

/// How often the countdown recomputes.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

pub const EXPIRED_LABEL: &str = "EXPIRED";

/// Shown before the first value is computed.
pub const PLACEHOLDER_LABEL: &str = "-";

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Expiry urgency, used for colouring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Neutral,
    /// Within 7 days.
    Warning,
    /// Within 24 hours, or already expired.
    Danger,
}

/// Milliseconds from `now` until `expiry` (negative once expired).
pub fn remaining_ms(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expiry - now).num_milliseconds()
}

pub fn format_remaining(remaining_ms: i64) -> String {
    if remaining_ms <= 0 {
        return EXPIRED_LABEL.to_string();
    }

    let days = remaining_ms / DAY_MS;
    let hours = (remaining_ms % DAY_MS) / HOUR_MS;
    let minutes = (remaining_ms % HOUR_MS) / MINUTE_MS;
    let seconds = (remaining_ms % MINUTE_MS) / SECOND_MS;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

pub fn classify(remaining_ms: i64) -> Urgency {
    if remaining_ms <= DAY_MS {
        Urgency::Danger
    } else if remaining_ms <= WEEK_MS {
        Urgency::Warning
    } else {
        Urgency::Neutral
    }
}

/// Countdown bound to one expiry timestamp.
///
/// Owns its 1s [`Interval`]; changing the expiry restarts it and
/// [`Countdown::stop`] tears it down.
#[derive(Debug, Clone)]
pub struct Countdown {
    expiry: Option<DateTime<Utc>>,
    ticker: Interval,
    label: Option<String>,
    urgency: Urgency,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            expiry: None,
            ticker: Interval::new(TICK_PERIOD),
            label: None,
            urgency: Urgency::Neutral,
        }
    }

    /// Bind to `expiry`. A different expiry restarts the ticker and
    /// recomputes immediately; the same expiry is a no-op.
    pub fn set_expiry(&mut self, expiry: DateTime<Utc>, now: Instant, wall: DateTime<Utc>) {
        if self.expiry == Some(expiry) {
            return;
        }
        self.expiry = Some(expiry);
        self.ticker.stop();
        self.ticker.start(now);
        self.refresh(wall);
    }

    /// Advance the ticker. Returns `true` when the label was recomputed.
    pub fn tick(&mut self, now: Instant, wall: DateTime<Utc>) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        self.refresh(wall);
        true
    }

    /// Tear down the ticker. The last label stays visible.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(PLACEHOLDER_LABEL)
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn is_expired(&self) -> bool {
        self.label.as_deref() == Some(EXPIRED_LABEL)
    }

    fn refresh(&mut self, wall: DateTime<Utc>) {
        let Some(expiry) = self.expiry else {
            return;
        };
        let remaining = remaining_ms(expiry, wall);
        self.label = Some(format_remaining(remaining));
        self.urgency = classify(remaining);
    }
}
