//! Quantity newtype - a line quantity that is never below one.
//!
//! Clerk input is coerced rather than rejected: text that is not a number becomes 1,
//! fractional numbers are truncated toward zero, and anything below 1 is raised to 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of units on a bill line. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest quantity, also the default.
    pub const ONE: Self = Self(1);

    /// Clamps `value` to the range `1..=u32::MAX`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(1, i64::from(u32::MAX));
        Self(u32::try_from(clamped).unwrap_or(1))
    }

    /// Parses clerk input. Non-numeric text is treated as 1.
    ///
    /// Decimal and exponent forms are accepted and truncated (`"2.5"` is 2, `"1e1"` is 10).
    /// Values too large to count saturate at `u32::MAX`.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let input = input.trim();
        if let Ok(whole) = input.parse::<i64>() {
            return Self::new(whole);
        }
        match input.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from_truncated(value),
            _ => Self::ONE,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_truncated(value: f64) -> Self {
        // Clamped into u32 range first, so the cast is exact
        Self(value.trunc().clamp(1.0, f64::from(u32::MAX)) as u32)
    }

    /// The raw count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        Self::from(quantity.0)
    }
}

impl From<Quantity> for f64 {
    fn from(quantity: Quantity) -> Self {
        Self::from(quantity.0)
    }
}
