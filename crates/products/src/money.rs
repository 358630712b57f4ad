use serde::{Deserialize, Serialize};

use stockroom_core::ValidationIssue;

/// Amount in the smallest currency unit (cents).
///
/// Integer cents keep `price * stock` totals exact; the form layer converts from the
/// decimal text people type.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse a decimal amount ("1299.99", "5", " 0.5 ") into cents, rounding to the
    /// nearest cent. Anything that does not round to at least one cent is rejected.
    pub fn parse_price(input: &str) -> Result<Self, ValidationIssue> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| ValidationIssue::NotANumber)?;
        if !value.is_finite() {
            return Err(ValidationIssue::NotANumber);
        }
        if value <= 0.0 {
            return Err(ValidationIssue::NonPositivePrice);
        }

        let cents = (value * 100.0).round();
        if cents < 1.0 {
            return Err(ValidationIssue::NonPositivePrice);
        }
        if cents >= u64::MAX as f64 {
            return Err(ValidationIssue::NotANumber);
        }
        Ok(Self(cents as u64))
    }

    /// `self * quantity`, saturating instead of overflowing.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

/// Two-decimal rendering without a currency symbol (`1299.99`).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}
