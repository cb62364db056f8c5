//! Order observer trait.

use thiserror::Error;

use crate::order::{DeliveryMethod, Order};

/// Errors an observer can report back to the order notifying it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserverError {
    /// The observer needed the address or pickup location and it was not set.
    #[error("{delivery_method} order has no delivery detail set")]
    MissingDeliveryDetail { delivery_method: DeliveryMethod },

    /// The observer's own storage was poisoned by a panicking writer.
    #[error("observer state lock poisoned")]
    Poisoned,

    /// The observer refused the notification.
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// A party notified each time an order's state behavior runs.
///
/// Observers are shared (`Arc`) so one observer can follow several orders.
/// `update` is called synchronously with the order already carrying its new
/// status.
pub trait OrderObserver: Send + Sync {
    /// Returns a name used in logs and error reports.
    fn name(&self) -> &str;

    /// Handles a status change of `order`.
    fn update(&self, order: &Order) -> Result<(), ObserverError>;
}
