//! Leverage multiplier as the order form allows it.
//!
//! The form's control runs from 1.0x to 3.0x in steps of 0.1, so every
//! value that enters a form goes through [`Leverage::new`], which clamps
//! into range and snaps onto the 0.1 grid.

use std::fmt;

pub const MIN_LEVERAGE: f64 = 1.0;
pub const MAX_LEVERAGE: f64 = 3.0;
pub const LEVERAGE_STEP: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Leverage(f64);

impl Leverage {
    /// Clamp to `[MIN_LEVERAGE, MAX_LEVERAGE]` and snap to one decimal.
    ///
    /// Non-finite input falls back to the minimum.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Leverage(MIN_LEVERAGE);
        }
        let clamped = value.clamp(MIN_LEVERAGE, MAX_LEVERAGE);
        // Halves round away from zero: 1.25 -> 1.3.
        Leverage((clamped * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// One step up, saturating at the maximum.
    pub fn step_up(self) -> Self {
        Leverage::new(self.0 + LEVERAGE_STEP)
    }

    /// One step down, saturating at the minimum.
    pub fn step_down(self) -> Self {
        Leverage::new(self.0 - LEVERAGE_STEP)
    }
}

impl Default for Leverage {
    fn default() -> Self {
        Leverage(MIN_LEVERAGE)
    }
}

impl fmt::Display for Leverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}
