//! Loyalty points ledger.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use common::{Amount, AmountError, CustomerId};

use crate::error::{PaymentError, Result};

/// Amount a customer spends to earn one point.
pub const DEFAULT_SPEND_PER_POINT: f64 = 100.0;

/// A ledger converting spend into reward points per customer.
pub trait LoyaltyProgram: Send + Sync {
    /// Credits points for `amount` spent by `customer`.
    ///
    /// Returns the points earned by this call. Negative or non-finite
    /// amounts are rejected and nothing is credited.
    fn earn_points(&self, customer: &CustomerId, amount: f64) -> Result<f64>;

    /// Returns the points accrued by `customer`, `0.0` if none.
    fn earned_points(&self, customer: &CustomerId) -> f64;
}

/// In-memory loyalty ledger earning one point per fixed spend.
///
/// Cloning shares the same ledger, so every processor holding a clone
/// credits the same balances.
#[derive(Debug, Clone)]
pub struct SimpleLoyaltyProgram {
    spend_per_point: f64,
    ledger: Arc<RwLock<HashMap<CustomerId, f64>>>,
}

impl SimpleLoyaltyProgram {
    /// Creates a ledger earning one point per [`DEFAULT_SPEND_PER_POINT`].
    pub fn new() -> Self {
        Self {
            spend_per_point: DEFAULT_SPEND_PER_POINT,
            ledger: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a ledger with a custom spend-per-point rate.
    pub fn with_spend_per_point(spend_per_point: f64) -> Result<Self> {
        if !spend_per_point.is_finite() || spend_per_point <= 0.0 {
            return Err(PaymentError::InvalidRate(spend_per_point));
        }
        Ok(Self {
            spend_per_point,
            ..Self::new()
        })
    }

    /// Returns the spend needed for one point.
    pub fn spend_per_point(&self) -> f64 {
        self.spend_per_point
    }

    /// Returns every customer's balance, sorted by customer.
    pub fn balances(&self) -> Vec<(CustomerId, f64)> {
        let ledger = self.ledger.read().unwrap_or_else(PoisonError::into_inner);
        let mut balances: Vec<_> = ledger.iter().map(|(c, p)| (c.clone(), *p)).collect();
        balances.sort_by(|a, b| a.0.cmp(&b.0));
        balances
    }
}

impl Default for SimpleLoyaltyProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl LoyaltyProgram for SimpleLoyaltyProgram {
    fn earn_points(&self, customer: &CustomerId, amount: f64) -> Result<f64> {
        let amount = Amount::new(amount)?;
        let points = amount.value() / self.spend_per_point;
        if !points.is_finite() {
            return Err(AmountError::NotFinite(points).into());
        }

        let mut ledger = self
            .ledger
            .write()
            .map_err(|_| PaymentError::LedgerPoisoned)?;
        let balance = ledger.entry(customer.clone()).or_insert(0.0);
        let updated = *balance + points;
        if !updated.is_finite() {
            return Err(AmountError::NotFinite(updated).into());
        }
        *balance = updated;

        tracing::debug!(%customer, points, balance = *balance, "loyalty points earned");
        metrics::histogram!("loyalty_points_earned").record(points);

        Ok(points)
    }

    fn earned_points(&self, customer: &CustomerId) -> f64 {
        self.ledger
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(customer)
            .copied()
            .unwrap_or(0.0)
    }
}
