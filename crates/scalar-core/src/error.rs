//! Errors for field input.
//!
//! The forms themselves are infallible; invalid text is filtered out
//! here before it reaches a setter.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// The text does not parse as a number.
    #[error("`{0}` is not a number")]
    NotANumber(String),

    /// Parsed, but infinite or NaN.
    #[error("`{0}` is not a finite number")]
    NotFinite(String),

    /// Investment below the minimum or not a whole number.
    #[error("investment must be a whole amount of at least 1, got {0}")]
    InvalidInvestment(f64),

    /// A submission is already in flight.
    #[error("order submission already in progress")]
    InFlight,
}

/// Parse user-entered numeric text (surrounding whitespace ignored).
pub fn parse_number(text: &str) -> Result<f64, FormError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FormError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(FormError::NotFinite(trimmed.to_string()));
    }
    Ok(value)
}
