//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when constructing a [`Money`] value.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// The input string is not a valid decimal number.
    #[error("Invalid money amount: {0}")]
    Parse(#[from] rust_decimal::Error),
}

/// A signed monetary amount.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// The currency is implicit: every ledger scope is single-currency and
/// currency conversion is out of scope for the engine.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new Money instance from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a Money instance from an integer number of minor units
    /// (e.g., cents): `from_minor_units(1050)` is 10.50.
    #[must_use]
    pub fn from_minor_units(units: i64) -> Self {
        Self(Decimal::new(units, 2))
    }

    /// Parses a Money value from a decimal string such as `"10.50"`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Parse` if the string is not a valid decimal.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        Ok(Self(s.parse::<Decimal>()?))
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to `scale` decimal places using banker's rounding
    /// (midpoint-nearest-even), the strategy used everywhere amounts
    /// are stored.
    #[must_use]
    pub fn rounded(self, scale: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Truncates toward zero at `scale` decimal places.
    #[must_use]
    pub fn truncated(self, scale: u32) -> Self {
        Self(self.0.round_dp_with_strategy(scale, RoundingStrategy::ToZero))
    }

    /// Returns true if the magnitude is below `tolerance`.
    ///
    /// Balances this small are treated as settled (rounding noise).
    #[must_use]
    pub fn is_negligible(self, tolerance: Decimal) -> bool {
        self.0.abs() < tolerance
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Multiply by a rational share (e.g., a percentage divided by 100).
impl std::ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self(self.0 * rhs)
    }
}

/// Divide by an exact count (used by allocation, which fixes up remainders).
impl std::ops::Div<Decimal> for Money {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self {
        Self(self.0 / rhs)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

impl<'a> std::iter::Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
