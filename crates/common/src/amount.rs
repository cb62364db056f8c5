//! Monetary amounts in the shop's single unit of account.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing an [`Amount`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AmountError {
    /// The value is NaN or infinite.
    #[error("Invalid amount: {0} is not a finite number")]
    NotFinite(f64),

    /// The value is below zero.
    #[error("Invalid amount: {0} (must not be negative)")]
    Negative(f64),
}

/// A non-negative, finite monetary amount.
///
/// Prices in the catalog are whole rupees but discounts produce fractions,
/// so the value is kept as `f64`. Every constructor validates, which means
/// any `Amount` in hand is safe to settle or to accrue points on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Creates an amount, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }
        // Normalise -0.0 so it displays as "0".
        Ok(Self(value + 0.0))
    }

    /// Creates an amount from a whole number of units. Cannot fail.
    pub fn from_units(units: u32) -> Self {
        Self(f64::from(units))
    }

    /// Returns a zero amount.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Adds two amounts, failing with [`AmountError::NotFinite`] when the
    /// total overflows.
    pub fn checked_add(self, rhs: Amount) -> Result<Amount, AmountError> {
        Amount::new(self.0 + rhs.0)
    }

    /// Sums amounts, failing on the first overflow.
    pub fn checked_sum<I>(amounts: I) -> Result<Amount, AmountError>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::zero(), Amount::checked_add)
    }

    /// Reduces the amount by a percentage in `0..=100`.
    ///
    /// Percentages outside that range are clamped.
    pub fn discounted_by(&self, percentage: u8) -> Amount {
        let pct = f64::from(percentage.min(100));
        Amount(self.0 * (100.0 - pct) / 100.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Saturates at `f64::MAX`. Use [`Amount::checked_add`] to detect overflow.
impl std::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount((self.0 + rhs.0).min(f64::MAX))
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
