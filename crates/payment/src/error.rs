//! Payment error types.

use common::AmountError;
use thiserror::Error;

use crate::strategy::PaymentMethod;

/// Errors that can occur while settling payments or running payment commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// The amount is negative or not a finite number.
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    /// The loyalty conversion rate is zero, negative or not finite.
    #[error("Invalid loyalty rate: {0} (must be a positive number)")]
    InvalidRate(f64),

    /// The strategy refused to settle.
    #[error("Payment declined by {method}: {reason}")]
    Declined {
        method: PaymentMethod,
        reason: String,
    },

    /// The loyalty ledger lock was poisoned.
    #[error("Loyalty ledger unavailable")]
    LedgerPoisoned,

    /// Feedback must have some text.
    #[error("Feedback message is empty")]
    EmptyFeedback,

    /// A single command failed.
    #[error("Command '{name}' failed: {reason}")]
    Command { name: String, reason: String },

    /// One or more queued commands failed. The queue was still emptied.
    #[error("{} of {total} queued commands failed: {}", .failed.len(), .failed.join(", "))]
    CommandsFailed { failed: Vec<String>, total: usize },
}

/// Convenience type alias for payment results.
pub type Result<T> = std::result::Result<T, PaymentError>;
